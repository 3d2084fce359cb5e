//! `lexiscope lookup <word>` — aggregate and display one lookup.

use crate::aggregate::WordLookup;
use crate::cli::output;
use crate::extract::Selectors;
use crate::panel::Panel;
use crate::sources::Endpoints;
use anyhow::{bail, Context, Result};

/// Run the lookup command.
pub async fn run(word: &str, timeout_ms: u64) -> Result<()> {
    if word.trim().is_empty() {
        bail!("lookup word is empty");
    }

    let lookup = WordLookup::with_config(Endpoints::default(), Selectors::default(), timeout_ms);
    let result = lookup
        .lookup(word)
        .await
        .with_context(|| format!("lookup for '{word}' failed"))?;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&result)?);
        return Ok(());
    }

    if !output::is_quiet()
        && result.synonyms.is_empty()
        && result.definitions.is_none()
        && result.etymology.is_empty()
    {
        eprintln!("  Warning: no source returned anything for '{word}'");
    }

    let mut panel = Panel::new();
    let seq = panel.begin_lookup();
    panel.present(seq, result);
    print!("{}", panel.render());
    Ok(())
}
