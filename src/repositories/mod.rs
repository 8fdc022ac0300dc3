//! Repository layer for database operations.
//!
//! Each domain gets an `async_trait` repository with a MongoDB implementation
//! and an in-memory one. Services only see the trait, so the backend is picked
//! once at startup and tests run without a database.

pub mod directory_repository;
pub mod drink_repository;
pub mod sequence;
pub mod trivia_repository;

use mongodb::bson::Regex;
use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

pub use directory_repository::{
    DirectoryRepository, InMemoryDirectoryRepository, MongoDirectoryRepository,
};
pub use drink_repository::{DrinkRepository, InMemoryDrinkRepository, MongoDrinkRepository};
pub use trivia_repository::{InMemoryTriviaRepository, MongoTriviaRepository, TriviaRepository};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },
    #[error("{entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: i64 },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

const DUPLICATE_KEY_CODE: i32 = 11000;

/// True when MongoDB rejected a write because of a unique index.
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE
    )
}

/// Case-insensitive "contains" pattern for a user-supplied search term.
pub(crate) fn contains_regex(term: &str) -> Regex {
    Regex {
        pattern: regex::escape(term.trim()),
        options: "i".to_string(),
    }
}

/// In-memory counterpart of [`contains_regex`].
pub(crate) fn contains_ignore_case(haystack: &str, term: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&term.trim().to_lowercase())
}
