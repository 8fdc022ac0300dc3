//! Booking directory request models.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_genres, validate_phone};

/// Request payload for listing a new venue
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVenueRequest {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    #[schema(example = "The Dueling Pianos Bar")]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "City is required"))]
    #[schema(example = "New York")]
    pub city: String,
    #[validate(length(min = 1, max = 120, message = "State is required"))]
    #[schema(example = "NY")]
    pub state: String,
    #[validate(length(min = 1, max = 120, message = "Address is required"))]
    #[schema(example = "335 Delancey Street")]
    pub address: String,
    #[validate(custom(function = "validate_phone"))]
    #[schema(example = "914-003-1132")]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_genres"))]
    #[schema(example = json!(["Classical", "R&B"]))]
    pub genres: Vec<String>,
    #[validate(url(message = "Image link must be a valid URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "Facebook link must be a valid URL"))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    #[validate(length(max = 500, message = "Seeking description must be at most 500 characters"))]
    pub seeking_description: Option<String>,
}

/// Request payload for editing a venue; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateVenueRequest {
    #[validate(length(min = 1, max = 120, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 120, message = "City must not be empty"))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 120, message = "State must not be empty"))]
    pub state: Option<String>,
    #[validate(length(min = 1, max = 120, message = "Address must not be empty"))]
    pub address: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_genres"))]
    pub genres: Option<Vec<String>>,
    #[validate(url(message = "Image link must be a valid URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "Facebook link must be a valid URL"))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    pub seeking_talent: Option<bool>,
    #[validate(length(max = 500, message = "Seeking description must be at most 500 characters"))]
    pub seeking_description: Option<String>,
}

/// Request payload for listing a new artist
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateArtistRequest {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    #[schema(example = "The Wild Sax Band")]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "City is required"))]
    #[schema(example = "San Francisco")]
    pub city: String,
    #[validate(length(min = 1, max = 120, message = "State is required"))]
    #[schema(example = "CA")]
    pub state: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,
    #[validate(url(message = "Image link must be a valid URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "Facebook link must be a valid URL"))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[validate(length(max = 500, message = "Seeking description must be at most 500 characters"))]
    pub seeking_description: Option<String>,
}

/// Request payload for editing an artist; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateArtistRequest {
    #[validate(length(min = 1, max = 120, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 120, message = "City must not be empty"))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 120, message = "State must not be empty"))]
    pub state: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_genres"))]
    pub genres: Option<Vec<String>>,
    #[validate(url(message = "Image link must be a valid URL"))]
    pub image_link: Option<String>,
    #[validate(url(message = "Facebook link must be a valid URL"))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    pub seeking_venue: Option<bool>,
    #[validate(length(max = 500, message = "Seeking description must be at most 500 characters"))]
    pub seeking_description: Option<String>,
}

/// Request payload for booking a show
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShowRequest {
    #[schema(example = 4)]
    pub artist_id: i64,
    #[schema(example = 1)]
    pub venue_id: i64,
    #[schema(example = "2035-04-01T20:00:00Z")]
    pub start_time: DateTime<Utc>,
}

/// Request payload for venue and artist search
#[derive(Debug, Deserialize, ToSchema)]
pub struct DirectorySearchRequest {
    /// Case-insensitive substring of the name
    #[serde(default)]
    #[schema(example = "Music")]
    pub search_term: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue_json(phone: &str) -> String {
        format!(
            r#"{{"name":"Hop","city":"SF","state":"CA","address":"1 Main","phone":"{}","genres":["Jazz"]}}"#,
            phone
        )
    }

    #[test]
    fn test_create_venue_valid() {
        let req: CreateVenueRequest = serde_json::from_str(&venue_json("123-456-7890")).unwrap();
        assert!(req.validate().is_ok());
        assert!(!req.seeking_talent);
    }

    #[test]
    fn test_create_venue_bad_phone() {
        let req: CreateVenueRequest = serde_json::from_str(&venue_json("1234567890")).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_create_venue_bad_website() {
        let req: CreateVenueRequest = serde_json::from_str(
            r#"{"name":"Hop","city":"SF","state":"CA","address":"1 Main","website":"not a url"}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_artist_empty_body_is_valid() {
        let req: UpdateArtistRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_show_parses_rfc3339() {
        let req: CreateShowRequest = serde_json::from_str(
            r#"{"artist_id":1,"venue_id":2,"start_time":"2035-04-01T20:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(req.start_time.to_rfc3339(), "2035-04-01T20:00:00+00:00");
    }
}
