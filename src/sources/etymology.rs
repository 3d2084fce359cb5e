//! Etymology adapter for the etymology scrape.

use super::Endpoints;
use crate::extract::{self, Selectors};
use crate::fetch::HttpClient;
use crate::model::{EtymologyMap, LookupError};

/// Look up etymology entries for `word`.
///
/// An unknown word is served as a 404 and maps to an empty map, as does a
/// page with no entry containers; neither is an error.
pub async fn lookup(
    client: &HttpClient,
    endpoints: &Endpoints,
    selectors: &Selectors,
    word: &str,
) -> Result<EtymologyMap, LookupError> {
    let url = endpoints.etymology_url(word)?;
    match client.get_text(&url).await {
        Ok(html) => extract::etymology(&html, selectors),
        Err(LookupError::Status { status: 404, .. }) => Ok(EtymologyMap::new()),
        Err(e) => Err(e),
    }
}
