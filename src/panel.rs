//! Presentation surface for completed lookups.
//!
//! Holds only the most recent result. A new lookup may be issued while an
//! older one is still in flight; [`Panel::present`] drops any result that
//! is not from the newest issued request (last-writer-wins), so the display
//! never regresses to a stale word.

use crate::model::LookupResult;

/// Sequence-numbered display state for lookup results.
#[derive(Debug, Default)]
pub struct Panel {
    issued: u64,
    shown: Option<(u64, LookupResult)>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new lookup request and return its sequence number.
    pub fn begin_lookup(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Offer a completed result. Returns `false` (and leaves the display
    /// untouched) when a newer request has been issued since `seq`.
    pub fn present(&mut self, seq: u64, result: LookupResult) -> bool {
        if seq < self.issued {
            return false;
        }
        self.shown = Some((seq, result));
        true
    }

    /// The currently displayed result, if any lookup has completed.
    pub fn current(&self) -> Option<&LookupResult> {
        self.shown.as_ref().map(|(_, r)| r)
    }

    /// Render the panel as text.
    ///
    /// Before the first completed lookup this renders nothing at all;
    /// afterwards, fields with nothing found render a neutral placeholder.
    /// The two states are deliberately distinct.
    pub fn render(&self) -> String {
        match self.current() {
            Some(result) => render_result(result),
            None => String::new(),
        }
    }
}

/// Render one result: header, definitions grouped by part of speech with
/// 1-based numbering, synonym list, etymology entries.
pub fn render_result(result: &LookupResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Synonyms for: {}\n", result.word));

    out.push('\n');
    match &result.definitions {
        Some(set) if !set.is_empty() => {
            for entry in set {
                out.push_str(&format!("### {}\n", entry.part_of_speech));
                for (i, gloss) in entry.definitions.iter().enumerate() {
                    out.push_str(&format!("{}. {}\n", i + 1, gloss));
                }
            }
        }
        _ => out.push_str("No definitions found.\n"),
    }

    out.push('\n');
    if result.synonyms.is_empty() {
        out.push_str("No synonyms found.\n");
    } else {
        for synonym in result.synonyms.iter() {
            out.push_str(&format!("- {synonym}\n"));
        }
    }

    out.push('\n');
    if result.etymology.is_empty() {
        out.push_str("No etymology found.\n");
    } else {
        for (headword, text) in result.etymology.iter() {
            let head = if headword.is_empty() {
                result.word.as_str()
            } else {
                headword
            };
            out.push_str(&format!("### {head}\n{text}\n"));
        }
    }

    out
}
