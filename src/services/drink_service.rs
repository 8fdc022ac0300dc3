//! Coffee shop menu service.

use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::constants::{
    CODE_DRINK_NOT_FOUND, CODE_DRINK_TITLE_EXISTS, CODE_UNPROCESSABLE, CODE_VALIDATION_FAILED,
};
use crate::errors::ApiError;
use crate::models::{
    CreateDrinkRequest, Drink, DrinkDeletedResponse, DrinksLongResponse, DrinksShortResponse,
    UpdateDrinkRequest,
};
use crate::repositories::{DrinkRepository, RepositoryError};

fn failed_write(err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::Duplicate { value, .. } => {
            warn!("Drink title {:?} is already on the menu", value);
            ApiError::unprocessable(CODE_DRINK_TITLE_EXISTS)
        }
        other => {
            error!("Failed to save drink: {}", other);
            ApiError::unprocessable(CODE_UNPROCESSABLE)
        }
    }
}

pub struct DrinkService {
    repository: Arc<dyn DrinkRepository>,
}

impl DrinkService {
    pub fn new(repository: Arc<dyn DrinkRepository>) -> Self {
        Self { repository }
    }

    /// Menu without ingredient names.
    pub async fn menu(&self) -> Result<DrinksShortResponse, ApiError> {
        let drinks = self.repository.drinks().await?;
        debug!("Serving short menu with {} drinks", drinks.len());
        Ok(DrinksShortResponse {
            success: true,
            drinks: drinks.iter().map(Drink::short).collect(),
        })
    }

    pub async fn menu_detail(&self) -> Result<DrinksLongResponse, ApiError> {
        Ok(DrinksLongResponse {
            success: true,
            drinks: self.repository.drinks().await?,
        })
    }

    pub async fn create(&self, req: CreateDrinkRequest) -> Result<DrinksLongResponse, ApiError> {
        let (Some(title), Some(recipe)) = (req.title, req.recipe) else {
            return Err(ApiError::unprocessable(CODE_VALIDATION_FAILED));
        };

        let drink = self
            .repository
            .insert(Drink {
                id: 0,
                title,
                recipe: recipe.into_vec(),
            })
            .await
            .map_err(failed_write)?;

        info!("Added drink {} ({:?}) to the menu", drink.id, drink.title);
        Ok(DrinksLongResponse {
            success: true,
            drinks: vec![drink],
        })
    }

    pub async fn update(
        &self,
        id: i64,
        req: UpdateDrinkRequest,
    ) -> Result<DrinksLongResponse, ApiError> {
        let mut drink = self.find(id).await?;
        if let Some(title) = req.title {
            drink.title = title;
        }
        if let Some(recipe) = req.recipe {
            drink.recipe = recipe.into_vec();
        }

        if !self.repository.update(&drink).await.map_err(failed_write)? {
            // Deleted between the lookup and the write.
            return Err(ApiError::not_found(CODE_DRINK_NOT_FOUND));
        }

        info!("Updated drink {}", id);
        Ok(DrinksLongResponse {
            success: true,
            drinks: vec![drink],
        })
    }

    pub async fn delete(&self, id: i64) -> Result<DrinkDeletedResponse, ApiError> {
        let deleted = self.repository.delete(id).await.map_err(failed_write)?;
        if !deleted {
            warn!("Delete failed: drink {} not found", id);
            return Err(ApiError::not_found(CODE_DRINK_NOT_FOUND));
        }

        info!("Removed drink {} from the menu", id);
        Ok(DrinkDeletedResponse {
            success: true,
            delete: id,
        })
    }

    async fn find(&self, id: i64) -> Result<Drink, ApiError> {
        self.repository.find(id).await?.ok_or_else(|| {
            warn!("Drink {} not found", id);
            ApiError::not_found(CODE_DRINK_NOT_FOUND)
        })
    }
}
