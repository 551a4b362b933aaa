//! Post-generation citation check.
//!
//! Flags article references in generated text that the assembled context
//! never mentions. Purely informational: generated text is never blocked or
//! rewritten.

use crate::query::anchors::{extract_anchors, mentions, refers_to};
use crate::types::{AssembledContext, CitationFinding};

/// One finding per distinct anchor cited in `generated`, in order of first
/// citation.
///
/// A citation is supported when the context references the same article or
/// one of its sub-sections. A cited sub-section needs the sub-section itself:
/// "205.9" is not backed by a bare "Artículo 205".
pub fn validate_citations(generated: &str, context: &AssembledContext) -> Vec<CitationFinding> {
    let cited = extract_anchors(generated);
    if cited.is_empty() {
        return Vec::new();
    }

    let available: Vec<&str> = mentions(&context.text).map(|m| m.number).collect();

    cited
        .into_iter()
        .map(|anchor| {
            let supported = available.iter().any(|number| refers_to(number, &anchor));
            CitationFinding { anchor, supported }
        })
        .collect()
}

/// Findings that are not backed by the context.
pub fn unsupported(findings: &[CitationFinding]) -> impl Iterator<Item = &CitationFinding> {
    findings.iter().filter(|f| !f.supported)
}
