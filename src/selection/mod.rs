pub mod budgeting;
pub mod classifier;
pub mod fallback;
pub mod ranking;

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::config::{ScoringConfig, SourcePolicy};
use crate::document::Document;
use crate::query::QueryAnalysis;
use crate::types::{RankedResult, ScoredDocument};
pub use budgeting::assemble;
pub use classifier::DocumentClassifier;
pub use fallback::truncate_with_fallback;
pub use ranking::{HeuristicScorer, Score, Scorer};

/// Scores, classifies and ranks a corpus snapshot for one query.
///
/// Stateless between calls: the same selector can serve concurrent queries.
pub struct ContextSelector<S> {
	scorer: S,
	classifier: DocumentClassifier,
	domain_terms: Vec<String>,
	mandatory_source: Option<SourcePolicy>,
}

impl Default for ContextSelector<HeuristicScorer> {
	fn default() -> Self {
		Self::from_config(ScoringConfig::default())
	}
}

impl ContextSelector<HeuristicScorer> {
	pub fn from_config(config: ScoringConfig) -> Self {
		let classifier = DocumentClassifier::new(&config.law_keywords);
		Self {
			classifier,
			domain_terms: config.domain_terms.clone(),
			mandatory_source: config.mandatory_source.clone(),
			scorer: HeuristicScorer::new(config),
		}
	}
}

impl<S> ContextSelector<S>
where
	S: Scorer,
{
	/// Selector with a custom scorer; classification, domain terms and the
	/// mandatory source still come from `config`.
	pub fn new(scorer: S, config: &ScoringConfig) -> Self {
		Self {
			scorer,
			classifier: DocumentClassifier::new(&config.law_keywords),
			domain_terms: config.domain_terms.clone(),
			mandatory_source: config.mandatory_source.clone(),
		}
	}

	pub fn analyze(&self, query: &str) -> QueryAnalysis {
		QueryAnalysis::analyze(query, &self.domain_terms)
	}

	pub fn rank(&self, query: &str, documents: &[Document], max_results: usize) -> RankedResult {
		let analysis = self.analyze(query);
		self.rank_analyzed(&analysis, documents, max_results)
	}

	pub fn rank_analyzed(
		&self,
		analysis: &QueryAnalysis,
		documents: &[Document],
		max_results: usize,
	) -> RankedResult {
		if documents.is_empty() {
			return RankedResult::empty(analysis.raw_query.clone());
		}

		// 1. Scoring Phase
		// Documents are independent; collect keeps corpus order.
		let mut scored: Vec<ScoredDocument> = documents
			.par_iter()
			.filter_map(|doc| {
				let document_type = self.classifier.classify(&doc.title);
				let Score { value, details } = self.scorer.score(doc, document_type, analysis);
				if value.is_nan() || value <= 0.0 {
					return None;
				}
				Some(ScoredDocument {
					document_id: doc.id.clone(),
					title: doc.title.clone(),
					content: doc.content.clone(),
					topic: doc.topic.clone(),
					relevance_score: value,
					category: doc
						.topic
						.clone()
						.unwrap_or_else(|| document_type.as_str().to_string()),
					document_type,
					why: details,
				})
			})
			.collect();

		let documents_scored = scored.len();
		debug!(
			query = %analysis.raw_query,
			considered = documents.len(),
			scored = documents_scored,
			"scored corpus"
		);

		// 2. Ordering Phase
		// Stable: ties keep corpus order.
		scored.sort_by(|a, b| {
			b.relevance_score
				.partial_cmp(&a.relevance_score)
				.unwrap_or(Ordering::Equal)
		});

		debug_assert!(scored
			.windows(2)
			.all(|w| w[0].relevance_score >= w[1].relevance_score));

		// 3. Cutoff + mandatory source
		let (documents_kept, promoted) = truncate_with_fallback(
			scored,
			max_results,
			self.mandatory_source.as_ref(),
			analysis,
		);

		RankedResult {
			query: analysis.raw_query.clone(),
			documents: documents_kept,
			promoted,
			documents_considered: documents.len(),
			documents_scored,
		}
	}
}
