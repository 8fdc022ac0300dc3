use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One part of a drink recipe.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate, ToSchema)]
pub struct Ingredient {
    #[validate(length(min = 1, message = "Ingredient name is required"))]
    #[schema(example = "espresso")]
    pub name: String,
    #[validate(length(min = 1, message = "Ingredient color is required"))]
    #[schema(example = "brown")]
    pub color: String,
    #[validate(range(min = 1, message = "Ingredient parts must be at least 1"))]
    #[schema(example = 1)]
    pub parts: u32,
}

/// Drink document stored in the `drinks` collection.
///
/// Serialized as is, this is the detailed ("long") representation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Drink {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "matcha shake")]
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Recipe part as shown to anonymous customers: no ingredient names.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct ShortIngredient {
    pub color: String,
    pub parts: u32,
}

/// Public ("short") drink representation.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct DrinkShort {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

impl Drink {
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|i| ShortIngredient {
                    color: i.color.clone(),
                    parts: i.parts,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_drops_ingredient_names() {
        let drink = Drink {
            id: 3,
            title: "flat white".to_string(),
            recipe: vec![
                Ingredient {
                    name: "espresso".to_string(),
                    color: "brown".to_string(),
                    parts: 1,
                },
                Ingredient {
                    name: "milk".to_string(),
                    color: "white".to_string(),
                    parts: 2,
                },
            ],
        };

        let json = serde_json::to_value(drink.short()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "title": "flat white",
                "recipe": [
                    {"color": "brown", "parts": 1},
                    {"color": "white", "parts": 2}
                ]
            })
        );
    }
}
