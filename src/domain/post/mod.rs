//! Post domain module

mod entity;
mod repository;
mod source;

pub use entity::{NewPost, Post, PostId};
pub use repository::PostRepository;
pub use source::{LegacyPage, LegacyPostRecord, LegacyPostSource};

#[cfg(test)]
pub use repository::mock;
#[cfg(test)]
pub use source::mock as source_mock;
