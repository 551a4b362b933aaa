use serde::{Deserialize, Serialize};

use crate::document::DocumentType;
use crate::types::identifiers::{ContextVersion, DocumentId};

/// A document that survived scoring with a positive relevance score.
/// Owns its title and content so a ranked result outlives the corpus snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document_id: DocumentId,
    pub title: String,
    pub content: String,
    pub topic: Option<String>,

    pub relevance_score: f64,
    pub category: String,
    pub document_type: DocumentType,

    pub why: ScoreDetails,
}

/// Explanation for why a document received its score.
///
/// Multipliers are listed in the order they were applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub anchors_matched: Vec<String>,
    pub named_sources: Vec<String>,
    pub content_hits: usize,
    pub title_hits: usize,
    pub full_title_match: bool,
    pub multipliers: Vec<String>,
}

/// Ranked, truncated output of the selection phase.
///
/// Ordered by descending relevance, except that a document promoted by the
/// mandatory-source fallback is placed first regardless of its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub query: String,
    pub documents: Vec<ScoredDocument>,
    pub promoted: Option<DocumentId>,

    pub documents_considered: usize,
    pub documents_scored: usize,
}

impl RankedResult {
    pub fn empty(query: impl Into<String>) -> Self {
        RankedResult {
            query: query.into(),
            documents: Vec::new(),
            promoted: None,
            documents_considered: 0,
            documents_scored: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.document_id.as_str()).collect()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|d| d.document_id.as_str() == id)
    }
}

/// The bounded text window handed to the generation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledContext {
    pub text: String,
    pub included_document_ids: Vec<DocumentId>,
    /// Length of `text` in characters.
    pub total_chars: usize,
    pub version: ContextVersion,
    pub assembly: AssemblyMetadata,
}

/// Metadata describing the outcome of context assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyMetadata {
    pub budget: usize,
    pub documents_ranked: usize,
    pub documents_included: usize,
    pub documents_windowed: usize,
    pub documents_omitted_by_budget: usize,
    pub fallback_excerpt_used: bool,
}

/// Whether an anchor cited by generated text is backed by the context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationFinding {
    pub anchor: String,
    pub supported: bool,
}
