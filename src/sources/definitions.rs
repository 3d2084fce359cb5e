//! Definition adapter for the dictionary API.

use super::Endpoints;
use crate::fetch::HttpClient;
use crate::model::{DefinitionEntry, DefinitionSet, LookupError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    meanings: Vec<DictionaryMeaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DictionaryMeaning {
    #[serde(default)]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<DictionaryGloss>,
}

#[derive(Debug, Deserialize)]
struct DictionaryGloss {
    #[serde(default)]
    definition: String,
}

/// Look up definitions for `word`.
///
/// Projects the first entry's meanings; an empty top-level array means the
/// API knows nothing about the word and maps to `None` (absent, not an
/// error). Transport and decode failures propagate; the aggregator converts
/// them to absent, since definitions are optional enrichment.
pub async fn lookup(
    client: &HttpClient,
    endpoints: &Endpoints,
    word: &str,
) -> Result<Option<DefinitionSet>, LookupError> {
    let url = endpoints.dictionary_url(word)?;
    let entries: Vec<DictionaryEntry> = client.get_json(&url).await?;

    let Some(first) = entries.into_iter().next() else {
        return Ok(None);
    };

    let set = first
        .meanings
        .into_iter()
        .map(|meaning| DefinitionEntry {
            part_of_speech: meaning.part_of_speech,
            definitions: meaning
                .definitions
                .into_iter()
                .map(|gloss| gloss.definition)
                .collect(),
        })
        .collect();
    Ok(Some(set))
}
