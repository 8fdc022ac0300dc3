//! Coffee shop response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Drink, DrinkShort};

/// Public menu
#[derive(Debug, Serialize, ToSchema)]
pub struct DrinksShortResponse {
    pub success: bool,
    pub drinks: Vec<DrinkShort>,
}

/// Menu with full recipes, or the drink(s) just created or edited
#[derive(Debug, Serialize, ToSchema)]
pub struct DrinksLongResponse {
    pub success: bool,
    pub drinks: Vec<Drink>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DrinkDeletedResponse {
    pub success: bool,
    /// Id of the deleted drink
    #[schema(example = 1)]
    pub delete: i64,
}
