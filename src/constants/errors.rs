//! Error message constants used throughout the application.
//!
//! Clients match on these exact strings, so they stay short and lowercase.

pub const ERR_BAD_REQUEST: &str = "bad request";
pub const ERR_UNAUTHORIZED: &str = "unauthorized";
pub const ERR_FORBIDDEN: &str = "forbidden";
pub const ERR_RESOURCE_NOT_FOUND: &str = "resource not found";
pub const ERR_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const ERR_UNPROCESSABLE: &str = "unprocessable";
pub const ERR_INTERNAL: &str = "internal server error";

// Validation details
pub const ERR_DRINK_FIELDS_REQUIRED: &str = "title and a non-empty recipe are required";
pub const ERR_INVALID_PHONE: &str = "Phone must be numbers in format xxx-xxx-xxxx";
pub const ERR_INVALID_GENRE: &str = "Genres must be non-empty names";
