//! Post infrastructure - persistence, legacy source and importer

mod http_source;
mod importer;
mod postgres_repository;

pub use http_source::HttpLegacyPostSource;
pub use importer::{ImportOutcome, PostImporter};
pub use postgres_repository::PostgresPostRepository;
