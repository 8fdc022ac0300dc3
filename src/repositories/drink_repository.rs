//! Drink repository for the coffee shop menu.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database, IndexModel};
use tokio::sync::RwLock;

use crate::constants::COLLECTION_DRINKS;
use crate::models::Drink;

use super::{is_duplicate_key, sequence, RepositoryError};

/// Storage of drinks, ordered by id. Titles are unique.
#[async_trait]
pub trait DrinkRepository: Send + Sync {
    async fn drinks(&self) -> Result<Vec<Drink>, RepositoryError>;

    async fn find(&self, id: i64) -> Result<Option<Drink>, RepositoryError>;

    /// Fails with [`RepositoryError::Duplicate`] when the title is taken.
    async fn insert(&self, drink: Drink) -> Result<Drink, RepositoryError>;

    /// Replace the stored drink with the same id. Returns `false` if absent.
    async fn update(&self, drink: &Drink) -> Result<bool, RepositoryError>;

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

fn duplicate_title(title: &str) -> RepositoryError {
    RepositoryError::Duplicate {
        field: "title",
        value: title.to_string(),
    }
}

/// MongoDB-backed drink storage.
pub struct MongoDrinkRepository {
    db: Database,
    collection: Collection<Drink>,
}

impl MongoDrinkRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            collection: db.collection(COLLECTION_DRINKS),
        }
    }

    /// Create unique indexes on `id` and `title`.
    pub async fn create_indexes(&self) -> Result<(), RepositoryError> {
        info!("Creating database indexes for drinks collection...");
        let unique = |keys: Document| {
            IndexModel::builder()
                .keys(keys)
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build()
        };
        self.collection
            .create_indexes(vec![unique(doc! { "id": 1 }), unique(doc! { "title": 1 })])
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DrinkRepository for MongoDrinkRepository {
    async fn drinks(&self) -> Result<Vec<Drink>, RepositoryError> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find(&self, id: i64) -> Result<Option<Drink>, RepositoryError> {
        debug!("Repository: Finding drink by ID: {}", id);
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn insert(&self, drink: Drink) -> Result<Drink, RepositoryError> {
        let drink = Drink {
            id: sequence::next_id(&self.db, COLLECTION_DRINKS).await?,
            ..drink
        };
        match self.collection.insert_one(&drink).await {
            Ok(_) => Ok(drink),
            Err(e) if is_duplicate_key(&e) => Err(duplicate_title(&drink.title)),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, drink: &Drink) -> Result<bool, RepositoryError> {
        match self
            .collection
            .replace_one(doc! { "id": drink.id }, drink)
            .await
        {
            Ok(result) => Ok(result.matched_count == 1),
            Err(e) if is_duplicate_key(&e) => Err(duplicate_title(&drink.title)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count == 1)
    }
}

#[derive(Default)]
struct DrinkState {
    drinks: Vec<Drink>,
    last_id: i64,
}

/// Drink storage kept in process memory.
#[derive(Default)]
pub struct InMemoryDrinkRepository {
    state: RwLock<DrinkState>,
}

impl InMemoryDrinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DrinkRepository for InMemoryDrinkRepository {
    async fn drinks(&self) -> Result<Vec<Drink>, RepositoryError> {
        Ok(self.state.read().await.drinks.clone())
    }

    async fn find(&self, id: i64) -> Result<Option<Drink>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.drinks.iter().find(|d| d.id == id).cloned())
    }

    async fn insert(&self, drink: Drink) -> Result<Drink, RepositoryError> {
        let mut state = self.state.write().await;
        if state.drinks.iter().any(|d| d.title == drink.title) {
            return Err(duplicate_title(&drink.title));
        }
        state.last_id += 1;
        let drink = Drink {
            id: state.last_id,
            ..drink
        };
        state.drinks.push(drink.clone());
        Ok(drink)
    }

    async fn update(&self, drink: &Drink) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        if state
            .drinks
            .iter()
            .any(|d| d.id != drink.id && d.title == drink.title)
        {
            return Err(duplicate_title(&drink.title));
        }
        match state.drinks.iter_mut().find(|d| d.id == drink.id) {
            Some(stored) => {
                *stored = drink.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.drinks.len();
        state.drinks.retain(|d| d.id != id);
        Ok(state.drinks.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn drink(title: &str) -> Drink {
        Drink {
            id: 0,
            title: title.to_string(),
            recipe: vec![Ingredient {
                name: "water".to_string(),
                color: "blue".to_string(),
                parts: 1,
            }],
        }
    }

    #[tokio::test]
    async fn test_duplicate_title_rejected() {
        let repo = InMemoryDrinkRepository::new();
        repo.insert(drink("water")).await.unwrap();
        let err = repo.insert(drink("water")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate { field: "title", .. }));
    }

    #[tokio::test]
    async fn test_update_cannot_steal_title() {
        let repo = InMemoryDrinkRepository::new();
        repo.insert(drink("water")).await.unwrap();
        let mut tea = repo.insert(drink("tea")).await.unwrap();
        tea.title = "water".to_string();
        assert!(repo.update(&tea).await.is_err());
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let repo = InMemoryDrinkRepository::new();
        let ghost = Drink {
            id: 42,
            ..drink("ghost")
        };
        assert!(!repo.update(&ghost).await.unwrap());
        assert!(!repo.delete(42).await.unwrap());
    }
}
