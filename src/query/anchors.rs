//! Article-reference ("anchor") detection.
//!
//! An anchor is the numeric part of "artículo N", "articulo N", "art. N" or
//! "art N", optionally with one level of dotted sub-numbering ("205.1").

use std::sync::LazyLock;

use regex::Regex;

static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:art[ií]culo|art\.?)[\s.]*(\d+(?:\.\d+)?)")
        .expect("anchor pattern is a valid regex")
});

/// One anchor-pattern occurrence inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorMention<'a> {
    pub number: &'a str,
    /// Byte offset where the whole reference ("Artículo 205") starts.
    pub start: usize,
    pub end: usize,
}

/// All anchor-pattern occurrences in `text`, in order.
pub fn mentions(text: &str) -> impl Iterator<Item = AnchorMention<'_>> {
    ANCHOR_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let number = caps.get(1)?;
        Some(AnchorMention {
            number: number.as_str(),
            start: whole.start(),
            end: whole.end(),
        })
    })
}

/// Distinct anchors mentioned in `text`, in order of first occurrence.
pub fn extract_anchors(text: &str) -> Vec<String> {
    let mut anchors: Vec<String> = Vec::new();
    for mention in mentions(text) {
        if !anchors.iter().any(|a| a == mention.number) {
            anchors.push(mention.number.to_string());
        }
    }
    anchors
}

/// True if a mentioned number refers to `anchor`.
///
/// "205.1" refers to anchor "205"; "420" never refers to anchor "42".
pub fn refers_to(mentioned: &str, anchor: &str) -> bool {
    match mentioned.strip_prefix(anchor) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}

/// True if `text` contains a reference to `anchor`.
pub fn mentions_anchor(text: &str, anchor: &str) -> bool {
    mentions(text).any(|m| refers_to(m.number, anchor))
}

/// First reference in `text` to any of `anchors`.
pub fn first_mention_of<'a>(text: &'a str, anchors: &[String]) -> Option<AnchorMention<'a>> {
    mentions(text).find(|m| anchors.iter().any(|a| refers_to(m.number, a)))
}
