//! The aggregator: one lookup, three concurrent sources, one merged result.

use crate::extract::Selectors;
use crate::fetch::{HttpClient, DEFAULT_TIMEOUT_MS};
use crate::model::{EtymologyMap, LookupError, LookupResult, SynonymList};
use crate::sources::{self, Endpoints};

/// Runs lookups against the configured sources.
///
/// Adapter failures are contained here: each one degrades to its empty or
/// absent shape with a logged cause. The only request-level failure is an
/// empty input word, which is rejected before any network call.
pub struct WordLookup {
    client: HttpClient,
    endpoints: Endpoints,
    selectors: Selectors,
}

impl WordLookup {
    /// Create a lookup against the live sources with the default timeout.
    pub fn new() -> Self {
        Self::with_config(Endpoints::default(), Selectors::default(), DEFAULT_TIMEOUT_MS)
    }

    /// Create a lookup with explicit endpoints, selectors, and timeout.
    pub fn with_config(endpoints: Endpoints, selectors: Selectors, timeout_ms: u64) -> Self {
        Self {
            client: HttpClient::new(timeout_ms),
            endpoints,
            selectors,
        }
    }

    /// Look up `word` across all sources concurrently.
    pub async fn lookup(&self, word: &str) -> Result<LookupResult, LookupError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(LookupError::EmptyWord);
        }

        // The three sources share no state; total latency is bounded by the
        // slowest single source.
        let (synonyms, definitions, etymology) = tokio::join!(
            sources::synonyms::lookup(&self.client, &self.endpoints, &self.selectors, word),
            sources::definitions::lookup(&self.client, &self.endpoints, word),
            sources::etymology::lookup(&self.client, &self.endpoints, &self.selectors, word),
        );

        let synonyms = synonyms.unwrap_or_else(|e| {
            tracing::warn!(word, error = %e, "synonym lookup failed");
            SynonymList::new()
        });
        let definitions = definitions.unwrap_or_else(|e| {
            tracing::warn!(word, error = %e, "definition lookup failed");
            None
        });
        let etymology = etymology.unwrap_or_else(|e| {
            tracing::warn!(word, error = %e, "etymology lookup failed");
            EtymologyMap::new()
        });

        Ok(LookupResult {
            word: word.to_string(),
            synonyms,
            definitions,
            etymology,
        })
    }
}

impl Default for WordLookup {
    fn default() -> Self {
        Self::new()
    }
}
