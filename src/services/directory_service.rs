//! Booking directory service for venues, artists and shows.
//!
//! Whether a show is past or upcoming depends on the instant passed in as
//! `now`; handlers pass the current time.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use crate::constants::{
    CODE_ARTIST_NOT_FOUND, CODE_UNPROCESSABLE, CODE_VENUE_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{
    Artist, ArtistAppearance, ArtistDetail, ArtistDetailResponse, ArtistResponse, ArtistSummary,
    ArtistsResponse, CreateArtistRequest, CreateShowRequest, CreateVenueRequest, DeletedResponse,
    DirectorySearchResponse, PageInfo, SearchHit, Show, ShowListing, ShowResponse, ShowsResponse,
    UpdateArtistRequest, UpdateVenueRequest, Venue, VenueArea, VenueAreasResponse, VenueBooking,
    VenueDetail, VenueDetailResponse, VenueResponse, VenueSummary,
};
use crate::pagination::{paginate, PageRequest};
use crate::repositories::{DirectoryRepository, RepositoryError};
use crate::utils::{mask_optional_phone, truncate_term};

fn failed_mutation(action: &str, err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::MissingReference { entity: "artist", id } => {
            warn!("Cannot {}: artist {} does not exist", action, id);
            ApiError::unprocessable(CODE_ARTIST_NOT_FOUND)
        }
        RepositoryError::MissingReference { id, .. } => {
            warn!("Cannot {}: venue {} does not exist", action, id);
            ApiError::unprocessable(CODE_VENUE_NOT_FOUND)
        }
        other => {
            error!("Failed to {}: {}", action, other);
            ApiError::unprocessable(CODE_UNPROCESSABLE)
        }
    }
}

/// Number of upcoming shows per venue or per artist, depending on `key`.
fn upcoming_counts(
    shows: &[Show],
    now: DateTime<Utc>,
    key: impl Fn(&Show) -> i64,
) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for show in shows.iter().filter(|s| s.is_upcoming(now)) {
        *counts.entry(key(show)).or_insert(0) += 1;
    }
    counts
}

/// Split shows (already ordered by start time) into past and upcoming.
fn split_by_time<T>(
    shows: &[Show],
    now: DateTime<Utc>,
    describe: impl Fn(&Show) -> Option<T>,
) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for show in shows {
        let Some(entry) = describe(show) else {
            warn!("Show {} references a missing record, skipping", show.id);
            continue;
        };
        if show.is_upcoming(now) {
            upcoming.push(entry);
        } else {
            past.push(entry);
        }
    }
    (past, upcoming)
}

fn search_response(
    hits: Vec<SearchHit>,
    page: PageRequest,
) -> DirectorySearchResponse {
    let count = hits.len() as u64;
    DirectorySearchResponse {
        success: true,
        count,
        data: paginate(&hits, page).to_vec(),
        page_info: PageInfo::new(page, count),
    }
}

pub struct DirectoryService {
    repository: Arc<dyn DirectoryRepository>,
}

impl DirectoryService {
    pub fn new(repository: Arc<dyn DirectoryRepository>) -> Self {
        Self { repository }
    }

    /// Venues grouped by area, areas ordered by state then city.
    pub async fn venue_areas(&self, now: DateTime<Utc>) -> Result<VenueAreasResponse, ApiError> {
        let venues = self.repository.venues().await?;
        let shows = self.repository.shows().await?;
        let counts = upcoming_counts(&shows, now, |s| s.venue_id);

        let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
        for venue in venues {
            areas
                .entry((venue.state, venue.city))
                .or_default()
                .push(VenueSummary {
                    id: venue.id,
                    num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
                    name: venue.name,
                });
        }
        debug!("Listing {} venue areas", areas.len());

        Ok(VenueAreasResponse {
            success: true,
            areas: areas
                .into_iter()
                .map(|((state, city), venues)| VenueArea {
                    city,
                    state,
                    venues,
                })
                .collect(),
        })
    }

    pub async fn venue_detail(
        &self,
        id: i64,
        now: DateTime<Utc>,
    ) -> Result<VenueDetailResponse, ApiError> {
        let venue = self.find_venue(id).await?;
        let shows = self.repository.shows_for_venue(id).await?;
        let artists: HashMap<i64, Artist> = self
            .repository
            .artists()
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let (past_shows, upcoming_shows) = split_by_time(&shows, now, |show| {
            artists.get(&show.artist_id).map(|artist| ArtistAppearance {
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: show.start_time,
            })
        });

        Ok(VenueDetailResponse {
            success: true,
            venue: VenueDetail {
                venue,
                past_shows_count: past_shows.len(),
                upcoming_shows_count: upcoming_shows.len(),
                past_shows,
                upcoming_shows,
            },
        })
    }

    pub async fn search_venues(
        &self,
        term: &str,
        page: PageRequest,
        now: DateTime<Utc>,
    ) -> Result<DirectorySearchResponse, ApiError> {
        debug!("Searching venues for {:?}", truncate_term(term));
        let venues = self.repository.search_venues(term).await?;
        let shows = self.repository.shows().await?;
        let counts = upcoming_counts(&shows, now, |s| s.venue_id);

        let hits = venues
            .into_iter()
            .map(|v| SearchHit {
                num_upcoming_shows: counts.get(&v.id).copied().unwrap_or(0),
                id: v.id,
                name: v.name,
            })
            .collect();
        Ok(search_response(hits, page))
    }

    pub async fn create_venue(&self, req: CreateVenueRequest) -> Result<VenueResponse, ApiError> {
        info!(
            "Creating venue {:?} in {}, {} (phone {})",
            req.name,
            req.city,
            req.state,
            mask_optional_phone(req.phone.as_deref())
        );
        let venue = self
            .repository
            .insert_venue(Venue {
                id: 0,
                name: req.name,
                city: req.city,
                state: req.state,
                address: req.address,
                phone: req.phone,
                genres: req.genres,
                image_link: req.image_link,
                facebook_link: req.facebook_link,
                website: req.website,
                seeking_talent: req.seeking_talent,
                seeking_description: req.seeking_description,
            })
            .await
            .map_err(|e| failed_mutation("create venue", e))?;

        info!("Venue {} was successfully listed", venue.id);
        Ok(VenueResponse {
            success: true,
            venue,
        })
    }

    pub async fn update_venue(
        &self,
        id: i64,
        req: UpdateVenueRequest,
    ) -> Result<VenueResponse, ApiError> {
        let mut venue = self.find_venue(id).await?;
        if let Some(name) = req.name {
            venue.name = name;
        }
        if let Some(city) = req.city {
            venue.city = city;
        }
        if let Some(state) = req.state {
            venue.state = state;
        }
        if let Some(address) = req.address {
            venue.address = address;
        }
        if let Some(genres) = req.genres {
            venue.genres = genres;
        }
        if let Some(seeking_talent) = req.seeking_talent {
            venue.seeking_talent = seeking_talent;
        }
        venue.phone = req.phone.or(venue.phone);
        venue.image_link = req.image_link.or(venue.image_link);
        venue.facebook_link = req.facebook_link.or(venue.facebook_link);
        venue.website = req.website.or(venue.website);
        venue.seeking_description = req.seeking_description.or(venue.seeking_description);

        let updated = self
            .repository
            .update_venue(&venue)
            .await
            .map_err(|e| failed_mutation("update venue", e))?;
        if !updated {
            return Err(ApiError::not_found(CODE_VENUE_NOT_FOUND));
        }

        info!("Updated venue {}", id);
        Ok(VenueResponse {
            success: true,
            venue,
        })
    }

    /// Delete a venue together with its shows.
    pub async fn delete_venue(&self, id: i64) -> Result<DeletedResponse, ApiError> {
        let deleted = self
            .repository
            .delete_venue(id)
            .await
            .map_err(|e| failed_mutation("delete venue", e))?;
        if !deleted {
            warn!("Delete failed: venue {} not found", id);
            return Err(ApiError::not_found(CODE_VENUE_NOT_FOUND));
        }

        info!("Deleted venue {}", id);
        Ok(DeletedResponse {
            success: true,
            deleted: id,
        })
    }

    pub async fn artists(&self) -> Result<ArtistsResponse, ApiError> {
        let artists = self.repository.artists().await?;
        debug!("Listing {} artists", artists.len());

        Ok(ArtistsResponse {
            success: true,
            artists: artists
                .into_iter()
                .map(|a| ArtistSummary {
                    id: a.id,
                    name: a.name,
                })
                .collect(),
        })
    }

    pub async fn artist_detail(
        &self,
        id: i64,
        now: DateTime<Utc>,
    ) -> Result<ArtistDetailResponse, ApiError> {
        let artist = self.find_artist(id).await?;
        let shows = self.repository.shows_for_artist(id).await?;
        let venues: HashMap<i64, Venue> = self
            .repository
            .venues()
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        let (past_shows, upcoming_shows) = split_by_time(&shows, now, |show| {
            venues.get(&show.venue_id).map(|venue| VenueBooking {
                venue_id: venue.id,
                venue_name: venue.name.clone(),
                venue_image_link: venue.image_link.clone(),
                start_time: show.start_time,
            })
        });

        Ok(ArtistDetailResponse {
            success: true,
            artist: ArtistDetail {
                artist,
                past_shows_count: past_shows.len(),
                upcoming_shows_count: upcoming_shows.len(),
                past_shows,
                upcoming_shows,
            },
        })
    }

    pub async fn search_artists(
        &self,
        term: &str,
        page: PageRequest,
        now: DateTime<Utc>,
    ) -> Result<DirectorySearchResponse, ApiError> {
        debug!("Searching artists for {:?}", truncate_term(term));
        let artists = self.repository.search_artists(term).await?;
        let shows = self.repository.shows().await?;
        let counts = upcoming_counts(&shows, now, |s| s.artist_id);

        let hits = artists
            .into_iter()
            .map(|a| SearchHit {
                num_upcoming_shows: counts.get(&a.id).copied().unwrap_or(0),
                id: a.id,
                name: a.name,
            })
            .collect();
        Ok(search_response(hits, page))
    }

    pub async fn create_artist(
        &self,
        req: CreateArtistRequest,
    ) -> Result<ArtistResponse, ApiError> {
        info!(
            "Creating artist {:?} from {}, {} (phone {})",
            req.name,
            req.city,
            req.state,
            mask_optional_phone(req.phone.as_deref())
        );
        let artist = self
            .repository
            .insert_artist(Artist {
                id: 0,
                name: req.name,
                city: req.city,
                state: req.state,
                phone: req.phone,
                genres: req.genres,
                image_link: req.image_link,
                facebook_link: req.facebook_link,
                website: req.website,
                seeking_venue: req.seeking_venue,
                seeking_description: req.seeking_description,
            })
            .await
            .map_err(|e| failed_mutation("create artist", e))?;

        info!("Artist {} was successfully listed", artist.id);
        Ok(ArtistResponse {
            success: true,
            artist,
        })
    }

    pub async fn update_artist(
        &self,
        id: i64,
        req: UpdateArtistRequest,
    ) -> Result<ArtistResponse, ApiError> {
        let mut artist = self.find_artist(id).await?;
        if let Some(name) = req.name {
            artist.name = name;
        }
        if let Some(city) = req.city {
            artist.city = city;
        }
        if let Some(state) = req.state {
            artist.state = state;
        }
        if let Some(genres) = req.genres {
            artist.genres = genres;
        }
        if let Some(seeking_venue) = req.seeking_venue {
            artist.seeking_venue = seeking_venue;
        }
        artist.phone = req.phone.or(artist.phone);
        artist.image_link = req.image_link.or(artist.image_link);
        artist.facebook_link = req.facebook_link.or(artist.facebook_link);
        artist.website = req.website.or(artist.website);
        artist.seeking_description = req.seeking_description.or(artist.seeking_description);

        let updated = self
            .repository
            .update_artist(&artist)
            .await
            .map_err(|e| failed_mutation("update artist", e))?;
        if !updated {
            return Err(ApiError::not_found(CODE_ARTIST_NOT_FOUND));
        }

        info!("Updated artist {}", id);
        Ok(ArtistResponse {
            success: true,
            artist,
        })
    }

    /// Every show, ordered by start time, with the names of both parties.
    pub async fn shows(&self) -> Result<ShowsResponse, ApiError> {
        let shows = self.repository.shows().await?;
        let venues: HashMap<i64, Venue> = self
            .repository
            .venues()
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();
        let artists: HashMap<i64, Artist> = self
            .repository
            .artists()
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let listings = shows
            .iter()
            .filter_map(|show| {
                let venue = venues.get(&show.venue_id)?;
                let artist = artists.get(&show.artist_id)?;
                Some(ShowListing {
                    show_id: show.id,
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect();

        Ok(ShowsResponse {
            success: true,
            shows: listings,
        })
    }

    pub async fn create_show(&self, req: CreateShowRequest) -> Result<ShowResponse, ApiError> {
        let show = self
            .repository
            .insert_show(Show {
                id: 0,
                artist_id: req.artist_id,
                venue_id: req.venue_id,
                start_time: req.start_time,
            })
            .await
            .map_err(|e| failed_mutation("list show", e))?;

        info!(
            "Show {} was successfully listed: artist {} at venue {} on {}",
            show.id, show.artist_id, show.venue_id, show.start_time
        );
        Ok(ShowResponse {
            success: true,
            show,
        })
    }

    async fn find_venue(&self, id: i64) -> Result<Venue, ApiError> {
        self.repository.find_venue(id).await?.ok_or_else(|| {
            warn!("Venue {} not found", id);
            ApiError::not_found(CODE_VENUE_NOT_FOUND)
        })
    }

    async fn find_artist(&self, id: i64) -> Result<Artist, ApiError> {
        self.repository.find_artist(id).await?.ok_or_else(|| {
            warn!("Artist {} not found", id);
            ApiError::not_found(CODE_ARTIST_NOT_FOUND)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryDirectoryRepository;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn venue_request(name: &str, city: &str, state: &str) -> CreateVenueRequest {
        CreateVenueRequest {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "1 Main Street".to_string(),
            phone: Some("415-555-0100".to_string()),
            genres: vec!["Jazz".to_string()],
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: true,
            seeking_description: None,
        }
    }

    fn artist_request(name: &str) -> CreateArtistRequest {
        CreateArtistRequest {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: vec!["Rock n Roll".to_string()],
            image_link: Some("https://example.com/a.jpg".to_string()),
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    fn show_at(artist_id: i64, venue_id: i64, days_from_now: i64) -> CreateShowRequest {
        CreateShowRequest {
            artist_id,
            venue_id,
            start_time: now() + chrono::Duration::days(days_from_now),
        }
    }

    async fn seeded() -> DirectoryService {
        let service = DirectoryService::new(Arc::new(InMemoryDirectoryRepository::new()));
        service
            .create_venue(venue_request("The Musical Hop", "San Francisco", "CA"))
            .await
            .unwrap();
        service
            .create_venue(venue_request("The Dueling Pianos Bar", "New York", "NY"))
            .await
            .unwrap();
        service
            .create_venue(venue_request("Park Square Live Music", "San Francisco", "CA"))
            .await
            .unwrap();
        service
            .create_artist(artist_request("Guns N Petals"))
            .await
            .unwrap();
        service.create_show(show_at(1, 1, -30)).await.unwrap();
        service.create_show(show_at(1, 1, 10)).await.unwrap();
        service.create_show(show_at(1, 3, 5)).await.unwrap();
        service
    }

    #[tokio::test]
    async fn test_venue_areas_group_and_count() {
        let service = seeded().await;
        let areas = service.venue_areas(now()).await.unwrap().areas;

        assert_eq!(areas.len(), 2);
        assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("San Francisco", "CA"));
        assert_eq!(
            areas[0].venues,
            vec![
                VenueSummary {
                    id: 1,
                    name: "The Musical Hop".to_string(),
                    num_upcoming_shows: 1,
                },
                VenueSummary {
                    id: 3,
                    name: "Park Square Live Music".to_string(),
                    num_upcoming_shows: 1,
                },
            ]
        );
        assert_eq!(areas[1].state, "NY");
    }

    #[tokio::test]
    async fn test_venue_detail_splits_shows() {
        let service = seeded().await;
        let detail = service.venue_detail(1, now()).await.unwrap().venue;
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.upcoming_shows[0].artist_name, "Guns N Petals");

        let err = service.venue_detail(99, now()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_artist_detail_orders_upcoming_by_start_time() {
        let service = seeded().await;
        let detail = service.artist_detail(1, now()).await.unwrap().artist;
        let venues: Vec<i64> = detail.upcoming_shows.iter().map(|b| b.venue_id).collect();
        assert_eq!(venues, vec![3, 1]);
        assert_eq!(detail.past_shows[0].venue_name, "The Musical Hop");
    }

    #[tokio::test]
    async fn test_search_venues_counts_all_matches() {
        let service = seeded().await;
        let result = service
            .search_venues("music", PageRequest::default(), now())
            .await
            .unwrap();
        assert_eq!(result.count, 2);
        assert_eq!(result.data.len(), 2);

        let past_end = service
            .search_venues("music", PageRequest::new(2), now())
            .await
            .unwrap();
        assert_eq!(past_end.count, 2);
        assert!(past_end.data.is_empty());
    }

    #[tokio::test]
    async fn test_show_with_unknown_venue_is_unprocessable() {
        let service = seeded().await;
        let err = service.create_show(show_at(1, 42, 1)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), CODE_VENUE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_venue_removes_its_shows() {
        let service = seeded().await;
        service.delete_venue(1).await.unwrap();
        let shows = service.shows().await.unwrap().shows;
        assert_eq!(shows.len(), 1);
        assert_eq!(shows[0].venue_name, "Park Square Live Music");

        let again = service.delete_venue(1).await.unwrap_err();
        assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_artist_is_partial() {
        let service = seeded().await;
        let updated = service
            .update_artist(
                1,
                UpdateArtistRequest {
                    seeking_venue: Some(true),
                    ..UpdateArtistRequest::default()
                },
            )
            .await
            .unwrap()
            .artist;
        assert!(updated.seeking_venue);
        assert_eq!(updated.name, "Guns N Petals");
        assert_eq!(updated.image_link.as_deref(), Some("https://example.com/a.jpg"));
    }

    #[tokio::test]
    async fn test_no_artists_is_an_empty_list() {
        let service = DirectoryService::new(Arc::new(InMemoryDirectoryRepository::new()));
        let response = service.artists().await.unwrap();
        assert!(response.success);
        assert!(response.artists.is_empty());
    }
}
