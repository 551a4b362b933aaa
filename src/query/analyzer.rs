use serde::{Deserialize, Serialize};

use crate::query::anchors::extract_anchors;
use crate::query::text::{char_len, fold, trim_token};

/// Minimum token length (exclusive, in characters) for a keyword.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Read-only analysis of a query, computed once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub raw_query: String,
    /// Lower-cased, trimmed query.
    pub normalized: String,
    pub keywords: Vec<String>,
    pub anchors: Vec<String>,
    pub has_domain_terms: bool,
}

impl QueryAnalysis {
    pub fn analyze(query: &str, domain_terms: &[String]) -> Self {
        let normalized = query.trim().to_lowercase();

        let mut keywords: Vec<String> = Vec::new();
        for token in normalized.split_whitespace() {
            let token = trim_token(token);
            if char_len(token) > MIN_KEYWORD_CHARS && !keywords.iter().any(|k| k == token) {
                keywords.push(token.to_string());
            }
        }

        let anchors = extract_anchors(query);

        let folded = fold(&normalized);
        let has_domain_terms = domain_terms
            .iter()
            .map(|term| fold(term.trim()))
            .any(|term| !term.is_empty() && folded.contains(&term));

        QueryAnalysis {
            raw_query: query.to_string(),
            normalized,
            keywords,
            anchors,
            has_domain_terms,
        }
    }

    pub fn has_anchors(&self) -> bool {
        !self.anchors.is_empty()
    }

    /// Accent-folded query tokens, punctuation trimmed.
    pub fn folded_tokens(&self) -> Vec<String> {
        fold(&self.normalized)
            .split_whitespace()
            .map(trim_token)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}
