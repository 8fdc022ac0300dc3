//! Integer id allocation for MongoDB collections.
//!
//! Records are addressed by small integer ids in URLs, so each collection
//! draws ids from a counter document instead of using ObjectIds.

use log::debug;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::Database;

use crate::constants::COLLECTION_COUNTERS;

use super::RepositoryError;

/// Atomically increment and return the counter for `collection`.
pub async fn next_id(db: &Database, collection: &str) -> Result<i64, RepositoryError> {
    let counter = db
        .collection::<Document>(COLLECTION_COUNTERS)
        .find_one_and_update(doc! { "_id": collection }, doc! { "$inc": { "seq": 1_i64 } })
        .upsert(true)
        .return_document(ReturnDocument::After)
        .await?
        .ok_or_else(|| RepositoryError::Unavailable(format!("no counter for {}", collection)))?;

    let id = counter
        .get_i64("seq")
        .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
    debug!("Allocated id {} in {}", id, collection);
    Ok(id)
}
