//! MongoDB collection names.

pub const COLLECTION_CATEGORIES: &str = "categories";
pub const COLLECTION_QUESTIONS: &str = "questions";
pub const COLLECTION_DRINKS: &str = "drinks";
pub const COLLECTION_VENUES: &str = "venues";
pub const COLLECTION_ARTISTS: &str = "artists";
pub const COLLECTION_SHOWS: &str = "shows";

/// Holds one `{ _id: <collection>, seq: <last id> }` document per collection.
pub const COLLECTION_COUNTERS: &str = "counters";
