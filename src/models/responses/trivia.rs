//! Trivia response models.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Category, PageInfo, Question};

/// Category id to category name, e.g. `{"1": "Science"}`.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
    pub total_categories: u64,
}

/// One page of all questions
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Always null: the listing spans every category
    pub current_category: Option<String>,
    #[serde(flatten)]
    pub page_info: PageInfo,
}

/// One page of the questions of a single category
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    #[schema(example = "Science")]
    pub current_category: String,
    #[serde(flatten)]
    pub page_info: PageInfo,
}

/// One page of questions matching a search term
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    #[serde(flatten)]
    pub page_info: PageInfo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i64,
    pub total_questions: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub total_questions: u64,
}

/// Next quiz question; absent once every eligible question has been asked
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_map_serializes_ids_as_keys() {
        let categories = vec![
            Category {
                id: 2,
                kind: "Art".to_string(),
            },
            Category {
                id: 1,
                kind: "Science".to_string(),
            },
        ];
        let json = serde_json::to_value(category_map(&categories)).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }

    #[test]
    fn test_exhausted_quiz_omits_question() {
        let json = serde_json::to_value(QuizResponse {
            success: true,
            question: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));
    }
}
