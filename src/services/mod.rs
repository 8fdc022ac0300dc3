//! Services organized by domain concern.

pub mod directory_service;
pub mod drink_service;
pub mod trivia_service;

use std::sync::Arc;

use log::info;
use mongodb::Database;

pub use directory_service::DirectoryService;
pub use drink_service::DrinkService;
pub use trivia_service::TriviaService;

use crate::repositories::{
    InMemoryDirectoryRepository, InMemoryDrinkRepository, InMemoryTriviaRepository,
    MongoDirectoryRepository, MongoDrinkRepository, MongoTriviaRepository, RepositoryError,
    TriviaRepository,
};

/// Categories a fresh store starts with.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Every service of the application, built once at startup and shared by
/// all workers.
#[derive(Clone)]
pub struct Services {
    pub trivia: Arc<TriviaService>,
    pub drinks: Arc<DrinkService>,
    pub directory: Arc<DirectoryService>,
}

impl Services {
    /// Services backed by process memory, with the default trivia categories.
    pub fn in_memory() -> Self {
        info!("Using in-memory storage");
        Self {
            trivia: Arc::new(TriviaService::new(Arc::new(
                InMemoryTriviaRepository::with_categories(&DEFAULT_CATEGORIES),
            ))),
            drinks: Arc::new(DrinkService::new(Arc::new(InMemoryDrinkRepository::new()))),
            directory: Arc::new(DirectoryService::new(Arc::new(
                InMemoryDirectoryRepository::new(),
            ))),
        }
    }

    /// Services backed by MongoDB. Indexes are created and an empty category
    /// collection is seeded before returning.
    pub async fn mongodb(db: &Database) -> Result<Self, RepositoryError> {
        let trivia = MongoTriviaRepository::new(db);
        let drinks = MongoDrinkRepository::new(db);
        let directory = MongoDirectoryRepository::new(db);

        trivia.create_indexes().await?;
        drinks.create_indexes().await?;
        directory.create_indexes().await?;
        info!("Database indexes created successfully");

        if trivia.categories().await?.is_empty() {
            for kind in DEFAULT_CATEGORIES {
                trivia.insert_category(kind).await?;
            }
            info!("Seeded {} trivia categories", DEFAULT_CATEGORIES.len());
        }

        Ok(Self {
            trivia: Arc::new(TriviaService::new(Arc::new(trivia))),
            drinks: Arc::new(DrinkService::new(Arc::new(drinks))),
            directory: Arc::new(DirectoryService::new(Arc::new(directory))),
        })
    }
}
