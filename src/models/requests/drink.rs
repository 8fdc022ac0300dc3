//! Coffee shop request models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Ingredient;
use crate::validators::validate_recipe;

/// A recipe may be posted as a single ingredient or as a list of them.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn ingredients(&self) -> &[Ingredient] {
        match self {
            RecipeInput::Many(items) => items,
            RecipeInput::One(item) => std::slice::from_ref(item),
        }
    }

    pub fn into_vec(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(items) => items,
            RecipeInput::One(item) => vec![item],
        }
    }
}

/// Request payload for adding a drink to the menu
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDrinkRequest {
    #[validate(
        required(message = "title and a non-empty recipe are required"),
        length(min = 1, message = "Title must not be empty")
    )]
    #[schema(example = "water")]
    pub title: Option<String>,
    #[validate(
        required(message = "title and a non-empty recipe are required"),
        custom(function = "validate_recipe")
    )]
    pub recipe: Option<RecipeInput>,
}

/// Request payload for editing a drink; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDrinkRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    #[schema(example = "sparkling water")]
    pub title: Option<String>,
    #[validate(custom(function = "validate_recipe"))]
    pub recipe: Option<RecipeInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_accepts_single_object() {
        let req: CreateDrinkRequest = serde_json::from_str(
            r#"{"title":"water","recipe":{"name":"water","color":"blue","parts":1}}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.recipe.unwrap().into_vec().len(), 1);
    }

    #[test]
    fn test_recipe_accepts_list() {
        let req: CreateDrinkRequest = serde_json::from_str(
            r#"{"title":"latte","recipe":[
                {"name":"espresso","color":"brown","parts":1},
                {"name":"milk","color":"white","parts":3}
            ]}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.recipe.unwrap().ingredients()[1].name, "milk");
    }

    #[test]
    fn test_missing_recipe_fails_validation() {
        let req: CreateDrinkRequest = serde_json::from_str(r#"{"title":"water"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_recipe_fails_validation() {
        let req: CreateDrinkRequest =
            serde_json::from_str(r#"{"title":"water","recipe":[]}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_allows_partial_body() {
        let req: UpdateDrinkRequest = serde_json::from_str(r#"{"title":"tea"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.recipe.is_none());
    }

    #[test]
    fn test_update_rejects_empty_recipe() {
        let req: UpdateDrinkRequest = serde_json::from_str(r#"{"recipe":[]}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("recipe"));
    }

    #[test]
    fn test_single_ingredient_recipe_serializes_flat() {
        let recipe: RecipeInput =
            serde_json::from_str(r#"{"name":"water","color":"blue","parts":1}"#).unwrap();
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["color"], "blue");
        assert_eq!(value["parts"], 1);
    }
}
