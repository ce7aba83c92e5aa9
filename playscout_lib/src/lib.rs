//! Library layer for Playscout: a concurrent Google Play search crawler.
//!
//! Builds the percent-encoded search URL for a term, discovers app detail
//! links on the listing page, fans out one fetch-and-extract task per link,
//! filters records whose name or description contains the term under its
//! case variants, and serializes the survivors to a keyed JSON document.

pub mod client;
pub mod errors;
pub mod extract;
pub mod query;
pub mod search;
pub mod serialize;
pub mod types;
mod user_agent;

pub use client::Client;
pub use errors::Error;
pub use extract::SelectorConfig;
pub use query::SearchQuery;
pub use search::{search, SearchOutcome};
pub use types::AppRecord;
