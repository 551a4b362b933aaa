//! Deterministic context retrieval and relevance ranking for grounded text
//! generation.
//!
//! `context-ranker` scores a corpus snapshot against a natural-language query
//! with a tunable multi-factor heuristic, ranks and truncates the result
//! while guaranteeing mandatory sources survive the cutoff, packs the winners
//! into a character-bounded context window using article-anchor windowing,
//! and checks generated text for citations the context does not back.
//!
//! Every step between the corpus provider and the generator is a pure
//! function: identical inputs always produce identical outputs.

pub mod config;
pub mod document;
pub mod generation;
pub mod query;
pub mod selection;
pub mod types;
pub mod validation;

pub use config::{ContextBudget, EngineConfig, ScoringConfig};
pub use document::{Document, DocumentType};
pub use query::QueryAnalysis;
pub use types::{AssembledContext, CitationFinding, RankedResult, ScoredDocument};

/// Analyze `query` with the domain terms from `config`.
pub fn analyze(query: &str, config: &ScoringConfig) -> QueryAnalysis {
    QueryAnalysis::analyze(query, &config.domain_terms)
}

/// Score, rank and truncate `documents` for `query`.
pub fn rank(
    query: &str,
    documents: &[Document],
    max_results: usize,
    config: &ScoringConfig,
) -> RankedResult {
    selection::ContextSelector::from_config(config.clone()).rank(query, documents, max_results)
}

/// Pack a ranked result into a bounded context window.
pub fn assemble(
    ranked: &RankedResult,
    analysis: &QueryAnalysis,
    budget: &ContextBudget,
) -> AssembledContext {
    selection::assemble(ranked, analysis, budget)
}

pub use validation::validate_citations;
