//! Core data types for word lookups.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Placeholder token some synonym pages emit for truncated groups.
const PLACEHOLDER: &str = "...";

/// An ordered list of distinct synonyms.
///
/// Insertion order is preserved; duplicates, empty strings, and the literal
/// `"..."` placeholder are dropped on insert, so every list handed out by
/// this crate satisfies those invariants by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SynonymList(Vec<String>);

impl SynonymList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a candidate synonym, dropping empties, placeholders, and
    /// anything already present.
    pub fn push(&mut self, candidate: impl Into<String>) {
        let candidate = candidate.into();
        if candidate.is_empty() || candidate == PLACEHOLDER {
            return;
        }
        if self.0.iter().any(|s| s == &candidate) {
            return;
        }
        self.0.push(candidate);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Consume the list, yielding the raw strings.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl FromIterator<String> for SynonymList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}

/// Definitions for one part of speech, in source order (1-based numbering
/// is implied by position).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionEntry {
    pub part_of_speech: String,
    pub definitions: Vec<String>,
}

/// All definition entries for a word.
pub type DefinitionSet = Vec<DefinitionEntry>;

/// Insertion-ordered map from headword variant to etymology text.
///
/// Keys are unique; inserting an existing key overwrites the value in
/// place, keeping the key's original position. Backed by a plain vector —
/// these maps hold a handful of entries at most.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EtymologyMap {
    entries: Vec<(String, String)>,
}

impl EtymologyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. A repeated key silently overwrites the earlier
    /// value; document order is source order.
    pub fn insert(&mut self, headword: impl Into<String>, text: impl Into<String>) {
        let headword = headword.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(k, _)| k == &headword) {
            Some((_, v)) => *v = text,
            None => self.entries.push((headword, text)),
        }
    }

    pub fn get(&self, headword: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == headword)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for EtymologyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The aggregate outcome of one lookup, built whole in a single pass.
///
/// `definitions` distinguishes absent from empty: `None` means the
/// dictionary fetch failed or knew nothing about the word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub word: String,
    pub synonyms: SynonymList,
    pub definitions: Option<DefinitionSet>,
    pub etymology: EtymologyMap,
}

/// Errors that can occur during a lookup.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("lookup word is empty")]
    EmptyWord,

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("could not parse response from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("invalid selector '{0}'")]
    Selector(String),

    #[error("cannot build lookup URL from base {0}")]
    Url(String),

    #[error("synonyms unavailable for '{word}'")]
    SynonymsUnavailable {
        word: String,
        #[source]
        source: Box<LookupError>,
    },
}
