use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Trivia category, e.g. "Science".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Category {
    #[schema(example = 1)]
    pub id: i64,
    #[serde(rename = "type")]
    #[schema(example = "Science")]
    pub kind: String,
}

/// Trivia question document, also its wire representation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Question {
    #[schema(example = 5)]
    pub id: i64,
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    pub question: String,
    #[schema(example = "Maya Angelou")]
    pub answer: String,
    /// Id of the owning category
    #[schema(example = 4)]
    pub category: i64,
    /// 1 (easy) to 5 (hard)
    #[schema(example = 2)]
    pub difficulty: i32,
}
