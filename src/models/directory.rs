//! Venue, artist and show documents of the booking directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Venue {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "The Musical Hop")]
    pub name: String,
    #[schema(example = "San Francisco")]
    pub city: String,
    #[schema(example = "CA")]
    pub state: String,
    #[schema(example = "1015 Folsom Street")]
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "123-123-1234")]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking_description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Artist {
    #[schema(example = 4)]
    pub id: i64,
    #[schema(example = "Guns N Petals")]
    pub name: String,
    #[schema(example = "San Francisco")]
    pub city: String,
    #[schema(example = "CA")]
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking_description: Option<String>,
}

/// An artist playing at a venue at a given time.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

impl Show {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_time > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap();
        let show = Show {
            id: 1,
            artist_id: 1,
            venue_id: 1,
            start_time: now,
        };
        assert!(!show.is_upcoming(now));
        assert!(show.is_upcoming(now - chrono::Duration::minutes(1)));
    }
}
