//! Keyed JSON serialization of search results.
//!
//! Records are deduplicated by a content hash of `url + name`; the first
//! occurrence wins. Keys live in a `BTreeMap`, so serializing the same
//! result set twice produces byte-identical output.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::{types::AppRecord, Error};

/// Serializes records to a JSON object mapping each record's dedup key to
/// the ordered 8-tuple `[name, url, author, category, description, rating,
/// reviewCount, lastUpdated]`. Fields that were absent on the page are
/// empty strings, never null.
pub fn to_keyed_json(records: &[AppRecord]) -> Result<Vec<u8>, Error> {
    let mut doc: BTreeMap<String, [&str; 8]> = BTreeMap::new();
    for record in records {
        doc.entry(dedup_key(record)).or_insert([
            &record.name,
            &record.url,
            &record.author,
            &record.category,
            &record.description,
            &record.rating,
            &record.review_count,
            &record.last_updated,
        ]);
    }
    Ok(serde_json::to_vec(&doc)?)
}

/// Content identity of a record: hex hash of its url and name.
fn dedup_key(record: &AppRecord) -> String {
    let mut hasher = Sha256::new();
    hasher.update(record.url.as_bytes());
    hasher.update(record.name.as_bytes());
    hex::encode(&hasher.finalize()[..16])
}
