use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::signature::{self, HeadingMatch};
use crate::error::ExtractError;
use crate::model::Param;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `h2` text with the leading ordinal removed.
    Category(String),
    /// `h3`/`h4`: closes the current description window.
    Subcategory,
    Signature { name: String, params: Vec<Param> },
    Paragraph { text: String, code: bool },
}

/// Ids of the headings that open and close the scanned region.
#[derive(Debug, Clone)]
pub struct Boundaries {
    pub start: String,
    pub end: String,
}

/// Walk the siblings after the start anchor up to the end anchor and emit
/// structural cues in document order.
///
/// An anchor is the parent of the `h1` carrying the marker id. One node
/// can yield several blocks; they come out in the order the extractor
/// must apply them: category, subcategory, signature, paragraph.
pub fn classify_nodes(doc: &Html, bounds: &Boundaries) -> Result<Vec<Block>, ExtractError> {
    let start = anchor(doc, &bounds.start)?;
    let end = anchor(doc, &bounds.end)?;

    let mut blocks = Vec::new();
    let mut reached_end = false;

    for node in start.next_siblings() {
        if node == *end {
            reached_end = true;
            break;
        }
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        classify_element(el, &mut blocks);
    }

    if !reached_end {
        warn!(
            "end marker \"{}\" is not a sibling of \"{}\"; scanned to the end of the section",
            bounds.end, bounds.start
        );
    }
    debug!("classified {} blocks", blocks.len());
    Ok(blocks)
}

/// Parent of the `h1` carrying `marker`. Other elements with the same id are ignored.
fn anchor<'a>(doc: &'a Html, marker: &str) -> Result<ElementRef<'a>, ExtractError> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "h1" && el.value().id() == Some(marker))
        .find_map(|heading| heading.parent().and_then(ElementRef::wrap))
        .ok_or_else(|| ExtractError::BoundaryNotFound {
            marker: marker.to_string(),
        })
}

fn classify_element(el: ElementRef, blocks: &mut Vec<Block>) {
    if let Some(text) = heading_text(el, &["h2"]) {
        blocks.push(Block::Category(strip_ordinal(&text)));
    }

    if find_heading(el, &["h3", "h4"]).is_some() {
        blocks.push(Block::Subcategory);
    }

    if let Some(text) = heading_text(el, &["h5"]) {
        if let HeadingMatch::Signature { name, params } = signature::classify(&text) {
            blocks.push(Block::Signature { name, params });
        }
    }

    if el.value().name() == "p" {
        blocks.push(paragraph(el));
    }
}

/// First element named one of `names`, the node itself included.
fn find_heading<'a>(el: ElementRef<'a>, names: &[&str]) -> Option<ElementRef<'a>> {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| names.contains(&e.value().name()))
}

/// Text of the first matching heading. Empty headings count as absent.
fn heading_text(el: ElementRef, names: &[&str]) -> Option<String> {
    let heading = find_heading(el, names)?;
    let text: String = heading.text().collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// "3 GRAPHICS" -> "GRAPHICS". Text without an ordinal is kept whole.
fn strip_ordinal(text: &str) -> String {
    let text = text.trim();
    match text.split_once(' ') {
        Some((_, rest)) => rest.trim().to_string(),
        None => text.to_string(),
    }
}

fn paragraph(el: ElementRef) -> Block {
    let code = el
        .value()
        .attr("class")
        .and_then(|c| c.split_whitespace().next())
        == Some("codebox");

    let text: String = el.text().collect();
    let text = text.trim().replace('\u{a0}', " ");

    Block::Paragraph { text, code }
}
