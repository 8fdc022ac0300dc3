//! Validators for drink recipes.

use validator::{Validate, ValidationError};

use crate::constants::ERR_DRINK_FIELDS_REQUIRED;
use crate::models::RecipeInput;

/// A recipe needs at least one ingredient and every ingredient must be valid.
pub fn validate_recipe(recipe: &RecipeInput) -> Result<(), ValidationError> {
    let ingredients = recipe.ingredients();
    if ingredients.is_empty() {
        let mut error = ValidationError::new("empty_recipe");
        error.message = Some(ERR_DRINK_FIELDS_REQUIRED.into());
        return Err(error);
    }

    for ingredient in ingredients {
        if let Err(errors) = ingredient.validate() {
            let mut error = ValidationError::new("invalid_ingredient");
            let detail = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .filter_map(|e| e.message.clone())
                .next();
            error.message = detail.or_else(|| Some("Invalid ingredient".into()));
            return Err(error);
        }
    }
    Ok(())
}
