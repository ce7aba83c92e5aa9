//! Data types shared across the crawler.

use serde::Serialize;

/// One extracted app record. `url` is set when the detail fetch starts;
/// every other field is filled in by the extractor and stays empty when
/// the page does not carry it. Absence is not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AppRecord {
    pub url: String,
    pub name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub rating: String,
    pub review_count: String,
    pub last_updated: String,
}

impl AppRecord {
    /// Creates an empty record anchored at its detail-page URL.
    pub fn new(url: String) -> Self {
        Self {
            url,
            ..Self::default()
        }
    }
}
