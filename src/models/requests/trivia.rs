//! Trivia request models.

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::Validate;

/// Ids arrive as numbers from API clients but as strings from form-driven
/// frontends; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn parse<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            RawId::Number(n) => Ok(n),
            RawId::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid id {:?}", s))),
        }
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?.parse()
}

fn lenient_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer)?
        .map(RawId::parse)
        .transpose()
}

fn lenient_id_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<RawId>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(RawId::parse::<D::Error>)
        .collect()
}

/// Request payload for creating a question
///
/// Every field is optional on the wire so that an incomplete body is reported
/// as a failed mutation rather than as malformed JSON.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(
        required(message = "question, answer, category and difficulty are all required"),
        length(min = 1, message = "Question text must not be empty")
    )]
    #[schema(example = "What is the heaviest organ in the human body?")]
    pub question: Option<String>,
    #[validate(
        required(message = "question, answer, category and difficulty are all required"),
        length(min = 1, message = "Answer must not be empty")
    )]
    #[schema(example = "The Liver")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_id")]
    #[validate(required(message = "question, answer, category and difficulty are all required"))]
    #[schema(value_type = Option<i64>, example = 1)]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "lenient_optional_id")]
    #[validate(
        required(message = "question, answer, category and difficulty are all required"),
        range(min = 1, max = 5, message = "Difficulty must be between 1 and 5")
    )]
    #[schema(value_type = Option<i64>, example = 4)]
    pub difficulty: Option<i64>,
}

/// Request payload for searching questions
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuestionsRequest {
    /// Case-insensitive substring of the question text; empty matches all
    #[serde(rename = "searchTerm", default)]
    #[schema(example = "title")]
    pub search_term: String,
}

/// Category selected for a quiz; id 0 stands for all categories
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient_id")]
    #[schema(value_type = i64, example = 0)]
    pub id: i64,
    #[serde(rename = "type", default)]
    #[schema(example = "click")]
    pub kind: Option<String>,
}

impl QuizCategory {
    /// Category filter, or `None` when the quiz spans every category.
    pub fn filter(&self) -> Option<i64> {
        (self.id != 0).then_some(self.id)
    }
}

/// Request payload for fetching the next quiz question
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Ids of questions already asked in this quiz
    #[serde(default, deserialize_with = "lenient_id_list")]
    #[schema(value_type = Vec<i64>, example = json!([1, 4]))]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_question_accepts_string_ids() {
        let req: CreateQuestionRequest = serde_json::from_str(
            r#"{"question":"q","answer":"a","category":"3","difficulty":2}"#,
        )
        .unwrap();
        assert_eq!(req.category, Some(3));
        assert_eq!(req.difficulty, Some(2));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_question_missing_fields_fail_validation() {
        let req: CreateQuestionRequest =
            serde_json::from_str(r#"{"question":"q","answer":""}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("answer"));
        assert!(fields.contains_key("category"));
        assert!(fields.contains_key("difficulty"));
    }

    #[test]
    fn test_difficulty_out_of_range() {
        let req: CreateQuestionRequest = serde_json::from_str(
            r#"{"question":"q","answer":"a","category":1,"difficulty":9}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_quiz_request_parsing() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions":[1,"2"],"quiz_category":{"type":"Science","id":"1"}}"#,
        )
        .unwrap();
        assert_eq!(req.previous_questions, vec![1, 2]);
        assert_eq!(req.quiz_category.unwrap().filter(), Some(1));

        let all: QuizRequest =
            serde_json::from_str(r#"{"quiz_category":{"type":"click","id":0}}"#).unwrap();
        assert!(all.previous_questions.is_empty());
        assert_eq!(all.quiz_category.unwrap().filter(), None);
    }

    #[test]
    fn test_quiz_request_without_category() {
        let req: QuizRequest = serde_json::from_str(r#"{"previous_questions":[]}"#).unwrap();
        assert!(req.quiz_category.is_none());
    }

    #[test]
    fn test_search_term_defaults_to_empty() {
        let req: SearchQuestionsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.search_term, "");
    }
}
