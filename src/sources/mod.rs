//! Source adapters: one module per external source, each mapping that
//! source's response shape into the shared lookup model.

pub mod definitions;
pub mod etymology;
pub mod synonyms;

use crate::model::LookupError;
use url::Url;

/// Base URLs for every consumed endpoint.
///
/// Defaults point at the live services; integration tests swap these for a
/// local mock server. The word is pushed as a percent-encoded path segment
/// (or query value), never spliced into the URL as raw text.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Synonym scrape: `{base}/{word}` serves an HTML thesaurus page.
    pub synonym_scrape_base: Url,
    /// Synonym fallback API: `{base}?rel_syn={word}` serves a JSON array.
    pub synonym_api_base: Url,
    /// Dictionary API: `{base}/{word}` serves a JSON array of entries.
    pub dictionary_api_base: Url,
    /// Etymology scrape: `{base}/{word}` serves an HTML entry page.
    pub etymology_base: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        let parse = |s: &str| Url::parse(s).expect("static endpoint URL");
        Self {
            synonym_scrape_base: parse("https://www.wordreference.com/synonyms"),
            synonym_api_base: parse("https://api.datamuse.com/words"),
            dictionary_api_base: parse("https://api.dictionaryapi.dev/api/v2/entries/en"),
            etymology_base: parse("https://www.etymonline.com/word"),
        }
    }
}

impl Endpoints {
    pub fn synonym_scrape_url(&self, word: &str) -> Result<Url, LookupError> {
        join_segment(&self.synonym_scrape_base, word)
    }

    pub fn synonym_api_url(&self, word: &str) -> Url {
        let mut url = self.synonym_api_base.clone();
        url.query_pairs_mut().append_pair("rel_syn", word);
        url
    }

    pub fn dictionary_url(&self, word: &str) -> Result<Url, LookupError> {
        join_segment(&self.dictionary_api_base, word)
    }

    pub fn etymology_url(&self, word: &str) -> Result<Url, LookupError> {
        join_segment(&self.etymology_base, word)
    }
}

/// Append `word` to `base` as one percent-encoded path segment.
fn join_segment(base: &Url, word: &str) -> Result<Url, LookupError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LookupError::Url(base.to_string()))?
        .push(word);
    Ok(url)
}
