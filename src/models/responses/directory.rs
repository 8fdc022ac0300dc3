//! Booking directory response models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Artist, PageInfo, Show, Venue};

/// Venue entry inside an area listing or a search result
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing a city and state
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VenueAreasResponse {
    pub success: bool,
    pub areas: Vec<VenueArea>,
}

/// A show as seen from the venue: who plays and when
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct ArtistAppearance {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show as seen from the artist: where and when
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct VenueBooking {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ArtistAppearance>,
    pub upcoming_shows: Vec<ArtistAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VenueDetailResponse {
    pub success: bool,
    pub venue: VenueDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<VenueBooking>,
    pub upcoming_shows: Vec<VenueBooking>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistDetailResponse {
    pub success: bool,
    pub artist: ArtistDetail,
}

/// Venue or artist search hit
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DirectorySearchResponse {
    pub success: bool,
    /// Number of matches across all pages
    pub count: u64,
    pub data: Vec<SearchHit>,
    #[serde(flatten)]
    pub page_info: PageInfo,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistsResponse {
    pub success: bool,
    pub artists: Vec<ArtistSummary>,
}

/// Show listing entry with the names of both parties
#[derive(Debug, Serialize, Clone, PartialEq, Eq, ToSchema)]
pub struct ShowListing {
    pub show_id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShowsResponse {
    pub success: bool,
    pub shows: Vec<ShowListing>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VenueResponse {
    pub success: bool,
    pub venue: Venue,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtistResponse {
    pub success: bool,
    pub artist: Artist,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShowResponse {
    pub success: bool,
    pub show: Show,
}
