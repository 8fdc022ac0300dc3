//! Directory repository for venues, artists and the shows linking them.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database, IndexModel};
use tokio::sync::RwLock;

use crate::constants::{COLLECTION_ARTISTS, COLLECTION_SHOWS, COLLECTION_VENUES};
use crate::models::{Artist, Show, Venue};

use super::{contains_ignore_case, contains_regex, sequence, RepositoryError};

/// Storage of the booking directory.
///
/// Venues and artists are listed by id, shows by start time. Deleting a venue
/// also deletes its shows.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    async fn venues(&self) -> Result<Vec<Venue>, RepositoryError>;

    async fn find_venue(&self, id: i64) -> Result<Option<Venue>, RepositoryError>;

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, RepositoryError>;

    async fn insert_venue(&self, venue: Venue) -> Result<Venue, RepositoryError>;

    async fn update_venue(&self, venue: &Venue) -> Result<bool, RepositoryError>;

    async fn delete_venue(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn artists(&self) -> Result<Vec<Artist>, RepositoryError>;

    async fn find_artist(&self, id: i64) -> Result<Option<Artist>, RepositoryError>;

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, RepositoryError>;

    async fn insert_artist(&self, artist: Artist) -> Result<Artist, RepositoryError>;

    async fn update_artist(&self, artist: &Artist) -> Result<bool, RepositoryError>;

    async fn shows(&self) -> Result<Vec<Show>, RepositoryError>;

    async fn shows_for_venue(&self, venue_id: i64) -> Result<Vec<Show>, RepositoryError>;

    async fn shows_for_artist(&self, artist_id: i64) -> Result<Vec<Show>, RepositoryError>;

    /// Fails with [`RepositoryError::MissingReference`] when the artist or
    /// venue does not exist.
    async fn insert_show(&self, show: Show) -> Result<Show, RepositoryError>;
}

/// MongoDB-backed directory storage.
pub struct MongoDirectoryRepository {
    db: Database,
    venues: Collection<Venue>,
    artists: Collection<Artist>,
    shows: Collection<Show>,
}

impl MongoDirectoryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            venues: db.collection(COLLECTION_VENUES),
            artists: db.collection(COLLECTION_ARTISTS),
            shows: db.collection(COLLECTION_SHOWS),
        }
    }

    /// Create unique id indexes plus the show lookup indexes.
    pub async fn create_indexes(&self) -> Result<(), RepositoryError> {
        info!("Creating database indexes for directory collections...");
        let unique_id = || {
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .unique(true)
                        .build(),
                )
                .build()
        };

        self.venues.create_index(unique_id()).await?;
        self.artists.create_index(unique_id()).await?;
        self.shows
            .create_indexes(vec![
                unique_id(),
                IndexModel::builder().keys(doc! { "venue_id": 1 }).build(),
                IndexModel::builder().keys(doc! { "artist_id": 1 }).build(),
            ])
            .await?;
        Ok(())
    }

    async fn find_shows(&self, filter: Document) -> Result<Vec<Show>, RepositoryError> {
        debug!("Repository: Finding shows with filter: {:?}", filter);
        let cursor = self.shows.find(filter).await?;
        let mut shows: Vec<Show> = cursor.try_collect().await?;
        // Start times are stored as RFC 3339 strings, which do not sort
        // chronologically when fractional seconds differ.
        shows.sort_by_key(|s| (s.start_time, s.id));
        Ok(shows)
    }
}

#[async_trait]
impl DirectoryRepository for MongoDirectoryRepository {
    async fn venues(&self) -> Result<Vec<Venue>, RepositoryError> {
        let cursor = self.venues.find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_venue(&self, id: i64) -> Result<Option<Venue>, RepositoryError> {
        debug!("Repository: Finding venue by ID: {}", id);
        Ok(self.venues.find_one(doc! { "id": id }).await?)
    }

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, RepositoryError> {
        let cursor = self
            .venues
            .find(doc! { "name": { "$regex": contains_regex(term) } })
            .sort(doc! { "id": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_venue(&self, venue: Venue) -> Result<Venue, RepositoryError> {
        let venue = Venue {
            id: sequence::next_id(&self.db, COLLECTION_VENUES).await?,
            ..venue
        };
        self.venues.insert_one(&venue).await?;
        Ok(venue)
    }

    async fn update_venue(&self, venue: &Venue) -> Result<bool, RepositoryError> {
        let result = self.venues.replace_one(doc! { "id": venue.id }, venue).await?;
        Ok(result.matched_count == 1)
    }

    async fn delete_venue(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = self.venues.delete_one(doc! { "id": id }).await?;
        if result.deleted_count == 0 {
            return Ok(false);
        }
        let shows = self.shows.delete_many(doc! { "venue_id": id }).await?;
        info!(
            "Deleted venue {} and {} of its shows",
            id, shows.deleted_count
        );
        Ok(true)
    }

    async fn artists(&self) -> Result<Vec<Artist>, RepositoryError> {
        let cursor = self.artists.find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_artist(&self, id: i64) -> Result<Option<Artist>, RepositoryError> {
        debug!("Repository: Finding artist by ID: {}", id);
        Ok(self.artists.find_one(doc! { "id": id }).await?)
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, RepositoryError> {
        let cursor = self
            .artists
            .find(doc! { "name": { "$regex": contains_regex(term) } })
            .sort(doc! { "id": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_artist(&self, artist: Artist) -> Result<Artist, RepositoryError> {
        let artist = Artist {
            id: sequence::next_id(&self.db, COLLECTION_ARTISTS).await?,
            ..artist
        };
        self.artists.insert_one(&artist).await?;
        Ok(artist)
    }

    async fn update_artist(&self, artist: &Artist) -> Result<bool, RepositoryError> {
        let result = self
            .artists
            .replace_one(doc! { "id": artist.id }, artist)
            .await?;
        Ok(result.matched_count == 1)
    }

    async fn shows(&self) -> Result<Vec<Show>, RepositoryError> {
        self.find_shows(doc! {}).await
    }

    async fn shows_for_venue(&self, venue_id: i64) -> Result<Vec<Show>, RepositoryError> {
        self.find_shows(doc! { "venue_id": venue_id }).await
    }

    async fn shows_for_artist(&self, artist_id: i64) -> Result<Vec<Show>, RepositoryError> {
        self.find_shows(doc! { "artist_id": artist_id }).await
    }

    async fn insert_show(&self, show: Show) -> Result<Show, RepositoryError> {
        if self.artists.count_documents(doc! { "id": show.artist_id }).await? == 0 {
            return Err(RepositoryError::MissingReference {
                entity: "artist",
                id: show.artist_id,
            });
        }
        if self.venues.count_documents(doc! { "id": show.venue_id }).await? == 0 {
            return Err(RepositoryError::MissingReference {
                entity: "venue",
                id: show.venue_id,
            });
        }

        let show = Show {
            id: sequence::next_id(&self.db, COLLECTION_SHOWS).await?,
            ..show
        };
        self.shows.insert_one(&show).await?;
        Ok(show)
    }
}

#[derive(Default)]
struct DirectoryState {
    venues: Vec<Venue>,
    artists: Vec<Artist>,
    shows: Vec<Show>,
    last_venue_id: i64,
    last_artist_id: i64,
    last_show_id: i64,
}

impl DirectoryState {
    fn shows_where(&self, keep: impl Fn(&Show) -> bool) -> Vec<Show> {
        let mut shows: Vec<Show> = self.shows.iter().filter(|s| keep(s)).cloned().collect();
        shows.sort_by_key(|s| (s.start_time, s.id));
        shows
    }
}

/// Directory storage kept in process memory.
#[derive(Default)]
pub struct InMemoryDirectoryRepository {
    state: RwLock<DirectoryState>,
}

impl InMemoryDirectoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectoryRepository {
    async fn venues(&self) -> Result<Vec<Venue>, RepositoryError> {
        Ok(self.state.read().await.venues.clone())
    }

    async fn find_venue(&self, id: i64) -> Result<Option<Venue>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.venues.iter().find(|v| v.id == id).cloned())
    }

    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .venues
            .iter()
            .filter(|v| contains_ignore_case(&v.name, term))
            .cloned()
            .collect())
    }

    async fn insert_venue(&self, venue: Venue) -> Result<Venue, RepositoryError> {
        let mut state = self.state.write().await;
        state.last_venue_id += 1;
        let venue = Venue {
            id: state.last_venue_id,
            ..venue
        };
        state.venues.push(venue.clone());
        Ok(venue)
    }

    async fn update_venue(&self, venue: &Venue) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        match state.venues.iter_mut().find(|v| v.id == venue.id) {
            Some(stored) => {
                *stored = venue.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_venue(&self, id: i64) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.venues.len();
        state.venues.retain(|v| v.id != id);
        if state.venues.len() == before {
            return Ok(false);
        }
        state.shows.retain(|s| s.venue_id != id);
        Ok(true)
    }

    async fn artists(&self) -> Result<Vec<Artist>, RepositoryError> {
        Ok(self.state.read().await.artists.clone())
    }

    async fn find_artist(&self, id: i64) -> Result<Option<Artist>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.artists.iter().find(|a| a.id == id).cloned())
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .artists
            .iter()
            .filter(|a| contains_ignore_case(&a.name, term))
            .cloned()
            .collect())
    }

    async fn insert_artist(&self, artist: Artist) -> Result<Artist, RepositoryError> {
        let mut state = self.state.write().await;
        state.last_artist_id += 1;
        let artist = Artist {
            id: state.last_artist_id,
            ..artist
        };
        state.artists.push(artist.clone());
        Ok(artist)
    }

    async fn update_artist(&self, artist: &Artist) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        match state.artists.iter_mut().find(|a| a.id == artist.id) {
            Some(stored) => {
                *stored = artist.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn shows(&self) -> Result<Vec<Show>, RepositoryError> {
        Ok(self.state.read().await.shows_where(|_| true))
    }

    async fn shows_for_venue(&self, venue_id: i64) -> Result<Vec<Show>, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .shows_where(|s| s.venue_id == venue_id))
    }

    async fn shows_for_artist(&self, artist_id: i64) -> Result<Vec<Show>, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .shows_where(|s| s.artist_id == artist_id))
    }

    async fn insert_show(&self, show: Show) -> Result<Show, RepositoryError> {
        let mut state = self.state.write().await;
        if !state.artists.iter().any(|a| a.id == show.artist_id) {
            return Err(RepositoryError::MissingReference {
                entity: "artist",
                id: show.artist_id,
            });
        }
        if !state.venues.iter().any(|v| v.id == show.venue_id) {
            return Err(RepositoryError::MissingReference {
                entity: "venue",
                id: show.venue_id,
            });
        }

        state.last_show_id += 1;
        let show = Show {
            id: state.last_show_id,
            ..show
        };
        state.shows.push(show.clone());
        Ok(show)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn venue(name: &str) -> Venue {
        Venue {
            id: 0,
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: None,
            genres: vec![],
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    fn artist(name: &str) -> Artist {
        Artist {
            id: 0,
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: vec![],
            image_link: None,
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    fn show(artist_id: i64, venue_id: i64, day: u32) -> Show {
        Show {
            id: 0,
            artist_id,
            venue_id,
            start_time: Utc.with_ymd_and_hms(2030, 1, day, 20, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_show_requires_existing_parties() {
        let repo = InMemoryDirectoryRepository::new();
        let hop = repo.insert_venue(venue("The Musical Hop")).await.unwrap();
        let err = repo.insert_show(show(9, hop.id, 1)).await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::MissingReference {
                entity: "artist",
                id: 9
            }
        ));
    }

    #[tokio::test]
    async fn test_shows_sorted_by_start_time() {
        let repo = InMemoryDirectoryRepository::new();
        let hop = repo.insert_venue(venue("The Musical Hop")).await.unwrap();
        let band = repo.insert_artist(artist("Guns N Petals")).await.unwrap();
        repo.insert_show(show(band.id, hop.id, 20)).await.unwrap();
        repo.insert_show(show(band.id, hop.id, 3)).await.unwrap();

        let ids: Vec<i64> = repo
            .shows_for_artist(band.id)
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_delete_venue_cascades_to_shows() {
        let repo = InMemoryDirectoryRepository::new();
        let hop = repo.insert_venue(venue("The Musical Hop")).await.unwrap();
        let park = repo.insert_venue(venue("Park Square")).await.unwrap();
        let band = repo.insert_artist(artist("Guns N Petals")).await.unwrap();
        repo.insert_show(show(band.id, hop.id, 1)).await.unwrap();
        repo.insert_show(show(band.id, park.id, 2)).await.unwrap();

        assert!(repo.delete_venue(hop.id).await.unwrap());
        let remaining = repo.shows().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].venue_id, park.id);
        assert!(!repo.delete_venue(hop.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let repo = InMemoryDirectoryRepository::new();
        repo.insert_venue(venue("The Musical Hop")).await.unwrap();
        repo.insert_venue(venue("Park Square Live Music & Coffee"))
            .await
            .unwrap();
        repo.insert_venue(venue("The Dueling Pianos Bar"))
            .await
            .unwrap();

        assert_eq!(repo.search_venues("music").await.unwrap().len(), 2);
        assert_eq!(repo.search_venues("HOP").await.unwrap().len(), 1);
    }
}
