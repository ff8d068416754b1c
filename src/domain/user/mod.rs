//! User domain module

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{
    UserValidationError, validate_email, validate_password, validate_username,
};

#[cfg(test)]
pub use repository::mock;
