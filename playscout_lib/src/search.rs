//! The concurrent search pipeline: listing discovery, per-app fan-out,
//! and result aggregation.

use tokio::task::JoinSet;
use url::Url;

use crate::{
    extract::{self, SelectorConfig},
    types::AppRecord,
    Client, Error, SearchQuery,
};

/// The accepted records of one search, plus the number of candidates that
/// were dropped because their detail page could not be fetched. Record
/// order is join order and carries no meaning.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub records: Vec<AppRecord>,
    pub dropped: usize,
}

/// Fetches one app detail page, extracts its fields, and reports whether
/// the name or description mentions the query term. Fetch failure maps to
/// [`Error::DetailUnreachable`]; the caller decides whether that is fatal.
pub async fn fetch_app(
    client: &Client,
    url: &str,
    query: &SearchQuery,
    cfg: &SelectorConfig,
) -> Result<(AppRecord, bool), Error> {
    let html = client
        .fetch_html(url)
        .await
        .map_err(|_| Error::DetailUnreachable)?;
    let record = extract::extract_record(&html, cfg, url.to_string());
    let included = query.matches(&record.name) || query.matches(&record.description);
    Ok((record, included))
}

/// Runs one search: fetches the listing page for the query term, follows
/// every discovered app-card link concurrently, and keeps the records
/// whose name or description matches.
///
/// A failed listing fetch aborts the whole search with
/// [`Error::ListingUnreachable`]. A failed detail fetch only drops that
/// candidate; it is logged and counted in [`SearchOutcome::dropped`].
pub async fn search(
    client: &Client,
    query: &SearchQuery,
    cfg: &SelectorConfig,
) -> Result<SearchOutcome, Error> {
    let base = Url::parse(client.base_url()).map_err(|e| {
        tracing::error!("invalid base URL {}: {}", client.base_url(), e);
        Error::ListingUnreachable
    })?;
    let listing_url = query.search_url(client.base_url());
    let html = client
        .fetch_html(&listing_url)
        .await
        .map_err(|_| Error::ListingUnreachable)?;

    let links = extract::listing_links(&html, cfg, &base);
    tracing::debug!("discovered {} candidate links for {:?}", links.len(), query.term());

    // One task per candidate, no concurrency cap. Results are appended
    // only here while draining the join set, so concurrent tasks never
    // touch the accumulator.
    let mut tasks = JoinSet::new();
    for link in links {
        let client = client.clone();
        let query = query.clone();
        let cfg = cfg.clone();
        tasks.spawn(async move { fetch_app(&client, &link, &query, &cfg).await });
    }

    let mut outcome = SearchOutcome::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok((record, true))) => outcome.records.push(record),
            Ok(Ok((_, false))) => {}
            Ok(Err(err)) => {
                outcome.dropped += 1;
                tracing::warn!("dropping candidate: {}", err);
            }
            Err(err) => {
                outcome.dropped += 1;
                tracing::warn!("detail task failed: {}", err);
            }
        }
    }
    Ok(outcome)
}
