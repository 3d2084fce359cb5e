//! Pure HTML extraction for the scraped sources.
//!
//! No I/O here: both patterns take raw HTML text, parse it with the
//! `scraper` crate, and walk a site-specific structure. The class markers
//! the walks key on are build-generated and brittle on both sites, so they
//! live in [`Selectors`] as plain configuration values rather than being
//! buried in the traversal code.

use crate::model::{EtymologyMap, LookupError, SynonymList};
use scraper::{ElementRef, Html, Selector};

/// Site-specific markup markers for both scraped sources.
///
/// Defaults match the live sites. When a site ships a new front-end build
/// and a scrape starts coming back empty, these are the values to update.
#[derive(Debug, Clone)]
pub struct Selectors {
    /// Class marking a synonym group container on the synonym page.
    pub synonym_container_class: String,
    /// Substring of a `style` attribute marking a crossed-out group.
    pub strikethrough_marker: String,
    /// CSS selector for one etymology entry container.
    pub etymology_container: String,
    /// CSS selector for the headword element inside an entry.
    pub etymology_headword: String,
    /// CSS selector for the definition body inside an entry.
    pub etymology_body: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            synonym_container_class: "engthes".to_string(),
            strikethrough_marker: "text-decoration".to_string(),
            etymology_container: r#"div[class^="word--"]"#.to_string(),
            etymology_headword: r#"[class^="word__name--"]"#.to_string(),
            etymology_body: r#"[class^="word__defination--"]"#.to_string(),
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector, LookupError> {
    Selector::parse(css).map_err(|_| LookupError::Selector(css.to_string()))
}

fn element_children<'a>(el: &ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

fn trimmed_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

// ── Synonym pattern ─────────────────────────────────────────────────────────

/// Extract synonyms from a synonym page.
///
/// Finds each container carrying the configured class, descends exactly two
/// levels of element children, skips any grandchild whose `style` attribute
/// carries the strikethrough marker (crossed-out words are a rendering
/// convention for rejected synonyms), and collects the trimmed text of each
/// direct `span` child. De-duplication and placeholder filtering happen in
/// [`SynonymList`].
pub fn synonyms(html: &str, selectors: &Selectors) -> Result<SynonymList, LookupError> {
    let container_sel = parse_selector(&format!(".{}", selectors.synonym_container_class))?;
    let doc = Html::parse_document(html);

    let mut list = SynonymList::new();
    for container in doc.select(&container_sel) {
        for child in element_children(&container) {
            for grandchild in element_children(&child) {
                let struck = grandchild
                    .value()
                    .attr("style")
                    .is_some_and(|s| s.contains(&selectors.strikethrough_marker));
                if struck {
                    continue;
                }
                for span in element_children(&grandchild)
                    .filter(|el| el.value().name() == "span")
                {
                    list.push(trimmed_text(&span));
                }
            }
        }
    }
    Ok(list)
}

// ── Etymology pattern ───────────────────────────────────────────────────────

/// Extract etymology entries from an etymology page.
///
/// One map entry per entry container: the headword element's text is the
/// key (empty string when the marker is absent) and the definition body's
/// first element child supplies the text. A repeated headword overwrites
/// the earlier entry, so document order is source order.
pub fn etymology(html: &str, selectors: &Selectors) -> Result<EtymologyMap, LookupError> {
    let container_sel = parse_selector(&selectors.etymology_container)?;
    let headword_sel = parse_selector(&selectors.etymology_headword)?;
    let body_sel = parse_selector(&selectors.etymology_body)?;
    let doc = Html::parse_document(html);

    let mut map = EtymologyMap::new();
    for entry in doc.select(&container_sel) {
        let headword = entry
            .select(&headword_sel)
            .next()
            .map(|el| trimmed_text(&el))
            .unwrap_or_default();
        let text = entry
            .select(&body_sel)
            .next()
            .and_then(|body| element_children(&body).next())
            .map(|el| trimmed_text(&el))
            .unwrap_or_default();
        map.insert(headword, text);
    }
    Ok(map)
}
