//! Common validation utilities and helpers.

use log::warn;
use validator::{Validate, ValidationErrors};

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// This helper function extracts error messages from ValidationErrors
/// and converts them into a format suitable for API responses.
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    errors.sort();
    errors.dedup();
    ApiError::validation(errors)
}

/// Validate a request body, logging and converting failures.
///
/// # Example
/// ```ignore
/// validate_body(&body, "create drink")?;
/// ```
pub fn validate_body<T: Validate>(body: &T, action: &str) -> Result<(), ApiError> {
    body.validate().map_err(|e| {
        let err = validation_errors_to_api_error(e);
        warn!("Validation failed for {}: {}", action, err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateQuestionRequest;

    #[test]
    fn test_duplicate_messages_collapse() {
        let req: CreateQuestionRequest = serde_json::from_str("{}").unwrap();
        match validate_body(&req, "create question").unwrap_err() {
            ApiError::ValidationError { errors, .. } => {
                assert_eq!(
                    errors,
                    vec!["question, answer, category and difficulty are all required".to_string()]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
