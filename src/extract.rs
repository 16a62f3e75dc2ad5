//! Extract one interface family from a raw documentation page.
//!
//! No JavaScript execution, no DOM rendering: raw HTML goes through the
//! `scraper` crate, the family container is located by its class marker,
//! and heading/description pairs are read out in document order.

use crate::catalog::{InterfaceEntry, InterfaceFamily, NO_SPEC_LINK};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::warn;

/// Class marker for the per-family interface list container.
const CONTAINER: &str = "div.interface-list.interface-list-content";
/// Family-level description block inside the container.
const FAMILY_DESCRIPTION: &str = "div.mainSection";
/// Per-entry heading elements.
const ENTRY_HEADING: &str = "h3.interface-title";
/// Per-entry description blocks, paired with headings by position.
const ENTRY_BLOCK: &str = "div.subSection";
/// Description text inside an entry block.
const ENTRY_DESCRIPTION: &str = "div.html-description";

/// Extraction failure on a family page.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A structural element the page layout guarantees was absent.
    /// Required precondition, fail fast: the whole family parse aborts.
    #[error("required element `{selector}` not found on {url}")]
    StructureNotFound {
        selector: &'static str,
        url: String,
    },
    /// An entry block had no readable description. Caught per entry.
    #[error("entry {heading:?} has no description block")]
    EntryDescriptionMissing { heading: String },
}

/// Parse one family documentation page into an [`InterfaceFamily`].
///
/// The container, family heading, and family description are required; any
/// of them missing fails the whole page. Individual entries that fail to
/// extract are logged and skipped, and the rest of the family survives.
pub fn parse_family_page(
    html: &str,
    base_url: &str,
    page_url: &str,
) -> Result<InterfaceFamily, ExtractError> {
    let document = Html::parse_document(html);

    let container = select_required(document.root_element(), CONTAINER, page_url)?;
    let heading = flatten_text(select_required(container, "h2", page_url)?);
    let description = flatten_text(select_required(container, FAMILY_DESCRIPTION, page_url)?);

    let heading_sel = Selector::parse(ENTRY_HEADING).unwrap();
    let block_sel = Selector::parse(ENTRY_BLOCK).unwrap();
    let headings: Vec<ElementRef<'_>> = container.select(&heading_sel).collect();
    let blocks: Vec<ElementRef<'_>> = container.select(&block_sel).collect();

    if headings.len() != blocks.len() {
        warn!(
            "{page_url}: {} entry headings vs {} description blocks, pairing truncates to the shorter",
            headings.len(),
            blocks.len()
        );
    }

    let mut entries = Vec::with_capacity(headings.len().min(blocks.len()));
    for (h3, block) in headings.into_iter().zip(blocks) {
        match extract_entry(h3, block, base_url) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("{page_url}: skipping interface entry: {e}"),
        }
    }

    Ok(InterfaceFamily {
        heading,
        description,
        source_url: page_url.to_string(),
        entries,
    })
}

/// First descendant matching `css`, or the fatal structure error.
fn select_required<'a>(
    scope: ElementRef<'a>,
    css: &'static str,
    page_url: &str,
) -> Result<ElementRef<'a>, ExtractError> {
    let sel = Selector::parse(css).unwrap();
    scope
        .select(&sel)
        .next()
        .ok_or_else(|| ExtractError::StructureNotFound {
            selector: css,
            url: page_url.to_string(),
        })
}

/// Extract one entry from its heading element and description block.
fn extract_entry(
    h3: ElementRef<'_>,
    block: ElementRef<'_>,
    base_url: &str,
) -> Result<InterfaceEntry, ExtractError> {
    let full_heading = flatten_text(h3);

    // An anchor only counts as a specification link when it carries an href.
    let anchor_sel = Selector::parse("a").unwrap();
    let anchor = h3.select(&anchor_sel).next().and_then(|a| {
        a.value()
            .attr("href")
            .map(|href| (href.to_string(), flatten_text(a)))
    });

    let (heading, spec_link) = match anchor {
        Some((href, link_text)) => {
            // The anchor's label would otherwise appear twice, once as the
            // link and once inside the heading text.
            let display = normalize_whitespace(&full_heading.replace(&link_text, ""));
            (display, format!("{base_url}/{href}"))
        }
        None => (full_heading.clone(), NO_SPEC_LINK.to_string()),
    };

    let desc_sel = Selector::parse(ENTRY_DESCRIPTION).unwrap();
    let description = block
        .select(&desc_sel)
        .next()
        .map(flatten_text)
        .ok_or_else(|| ExtractError::EntryDescriptionMissing {
            heading: full_heading.clone(),
        })?;

    Ok(InterfaceEntry {
        heading,
        description,
        spec_link,
    })
}

/// Flatten an element's text nodes into one whitespace-normalized string.
fn flatten_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
