//! Synonym adapter: scrape first, JSON API fallback.
//!
//! The scrape is the richer source but the flakier one. An errored scrape
//! and an empty parse are treated the same: both take the fallback path, so
//! the output is always exactly one source's list, never a mix.

use super::Endpoints;
use crate::extract::{self, Selectors};
use crate::fetch::HttpClient;
use crate::model::{LookupError, SynonymList};
use serde::Deserialize;

/// One object in the fallback API's response array. Only the `word` field
/// is projected; the rest (score, tags) is ignored.
#[derive(Debug, Deserialize)]
struct ApiSynonym {
    word: String,
}

/// Look up synonyms for `word`.
///
/// Fails with [`LookupError::SynonymsUnavailable`] only when the fallback
/// API also fails; callers treat that as "no synonyms", not a fatal error.
pub async fn lookup(
    client: &HttpClient,
    endpoints: &Endpoints,
    selectors: &Selectors,
    word: &str,
) -> Result<SynonymList, LookupError> {
    match scrape(client, endpoints, selectors, word).await {
        Ok(list) if !list.is_empty() => return Ok(list),
        Ok(_) => {
            tracing::debug!(word, "synonym scrape came back empty, trying fallback API");
        }
        Err(e) => {
            tracing::debug!(word, error = %e, "synonym scrape failed, trying fallback API");
        }
    }

    fallback(client, endpoints, word)
        .await
        .map_err(|e| LookupError::SynonymsUnavailable {
            word: word.to_string(),
            source: Box::new(e),
        })
}

async fn scrape(
    client: &HttpClient,
    endpoints: &Endpoints,
    selectors: &Selectors,
    word: &str,
) -> Result<SynonymList, LookupError> {
    let url = endpoints.synonym_scrape_url(word)?;
    let html = client.get_text(&url).await?;
    extract::synonyms(&html, selectors)
}

async fn fallback(
    client: &HttpClient,
    endpoints: &Endpoints,
    word: &str,
) -> Result<SynonymList, LookupError> {
    let url = endpoints.synonym_api_url(word);
    let entries: Vec<ApiSynonym> = client.get_json(&url).await?;
    Ok(entries.into_iter().map(|e| e.word).collect())
}
