//! Error types for the crawler.

/// Errors that can occur while building a query, fetching pages, or
/// serializing results.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or bad URL).
    #[error("request failed")]
    RequestFailed,
    /// The server returned a non-success status.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16 },
    /// The listing page could not be fetched. Fatal for the whole search.
    #[error("can't open the search results page")]
    ListingUnreachable,
    /// One detail page could not be fetched. The candidate is dropped and
    /// the search continues.
    #[error("can't open the app page")]
    DetailUnreachable,
    /// The search term failed validation.
    #[error("invalid search term: {0}")]
    InvalidQuery(String),
    /// JSON serialization of the result document failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
