//! Shared API response models.

use serde::Serialize;
use utoipa::ToSchema;

/// Error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Whether the request was successful (always false for errors)
    #[schema(example = false)]
    pub success: bool,
    /// HTTP status code
    #[schema(example = 404)]
    pub error: u16,
    /// Machine-readable error code
    #[schema(example = "QUESTION_NOT_FOUND")]
    pub code: String,
    /// Error message
    #[schema(example = "resource not found")]
    pub message: String,
    /// Detailed validation errors (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}

/// Confirmation of a deleted record
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    /// Id of the deleted record
    #[schema(example = 7)]
    pub deleted: i64,
}
