//! Validators for venue and artist fields.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::constants::{ERR_INVALID_GENRE, ERR_INVALID_PHONE};

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone pattern compiles"));

/// Phone numbers are stored in `xxx-xxx-xxxx` form.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_PATTERN.is_match(phone) {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_phone");
    error.message = Some(ERR_INVALID_PHONE.into());
    Err(error)
}

pub fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.iter().all(|g| !g.trim().is_empty()) {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_genre");
    error.message = Some(ERR_INVALID_GENRE.into());
    Err(error)
}
