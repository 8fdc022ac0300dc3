//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_JSON: &str = "INVALID_JSON";
pub const CODE_INVALID_QUERY: &str = "INVALID_QUERY";

// Authentication errors
pub const CODE_AUTH_REQUIRED: &str = "AUTH_REQUIRED";
pub const CODE_INVALID_TOKEN: &str = "INVALID_TOKEN";

// Authorization errors
pub const CODE_PERMISSION_MISSING: &str = "PERMISSION_MISSING";

// Trivia errors
pub const CODE_NO_CATEGORIES: &str = "NO_CATEGORIES";
pub const CODE_CATEGORY_NOT_FOUND: &str = "CATEGORY_NOT_FOUND";
pub const CODE_QUESTION_NOT_FOUND: &str = "QUESTION_NOT_FOUND";
pub const CODE_PAGE_EMPTY: &str = "PAGE_EMPTY";
pub const CODE_QUIZ_CATEGORY_REQUIRED: &str = "QUIZ_CATEGORY_REQUIRED";

// Coffee shop errors
pub const CODE_DRINK_NOT_FOUND: &str = "DRINK_NOT_FOUND";
pub const CODE_DRINK_TITLE_EXISTS: &str = "DRINK_TITLE_EXISTS";

// Directory errors
pub const CODE_VENUE_NOT_FOUND: &str = "VENUE_NOT_FOUND";
pub const CODE_ARTIST_NOT_FOUND: &str = "ARTIST_NOT_FOUND";

// Generic errors
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
pub const CODE_UNPROCESSABLE: &str = "UNPROCESSABLE";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
