use crate::config::{Candidate, ScoringConfig};
use crate::document::{Document, DocumentType};
use crate::query::anchors::{mentions, refers_to};
use crate::query::text::{contains_word, count_occurrences, fold};
use crate::query::QueryAnalysis;
use crate::types::ScoreDetails;

/// A relevance score together with its explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub value: f64,
    pub details: ScoreDetails,
}

pub trait Scorer: Sync {
    fn score(&self, doc: &Document, document_type: DocumentType, analysis: &QueryAnalysis)
        -> Score;
}

/// Multi-factor heuristic scorer.
///
/// Additive bonuses (anchors, named sources, keyword frequency, full query in
/// title) are summed first. Multipliers then act on the running total in a
/// fixed order: law, canonical source, topic alignment, topic keyword.
/// Reordering them changes rankings.
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    config: ScoringConfig,
}

impl HeuristicScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

impl Scorer for HeuristicScorer {
    fn score(
        &self,
        doc: &Document,
        document_type: DocumentType,
        analysis: &QueryAnalysis,
    ) -> Score {
        let weights = &self.config.weights;
        let multipliers = &self.config.multipliers;
        let mut details = ScoreDetails::default();
        let mut score = 0.0;

        // 1. Anchors referenced by the content
        if analysis.has_anchors() {
            let referenced: Vec<&str> = mentions(&doc.content).map(|m| m.number).collect();
            for anchor in &analysis.anchors {
                if referenced.iter().any(|m| refers_to(m, anchor)) {
                    score += weights.anchor;
                    details.anchors_matched.push(anchor.clone());
                }
            }
        }

        // 2. Named sources
        let folded_query = fold(&analysis.normalized);
        let folded_title = fold(&doc.title);
        for (keyword, canonical) in &self.config.named_source_aliases {
            let keyword = fold(keyword.trim());
            let canonical_name = fold(canonical.trim());
            if !contains_word(&folded_query, &keyword) {
                continue;
            }
            let in_title = contains_word(&folded_title, &keyword)
                || (!canonical_name.is_empty() && folded_title.contains(&canonical_name));
            if in_title {
                score += weights.named_source;
                details.named_sources.push(canonical.clone());
            }
        }

        // 3. Keyword frequency
        if !analysis.keywords.is_empty() {
            let content = doc.content.to_lowercase();
            let title = doc.title.to_lowercase();
            for keyword in &analysis.keywords {
                details.content_hits += count_occurrences(&content, keyword);
                details.title_hits += count_occurrences(&title, keyword);
            }
            score += details.content_hits as f64 * weights.content;
            score += details.title_hits as f64 * weights.title;
        }

        // 4. Whole query in title
        if !analysis.normalized.is_empty() && doc.title.to_lowercase().contains(&analysis.normalized)
        {
            score += weights.full_title;
            details.full_title_match = true;
        }

        // 5. Law boost for domain queries
        if analysis.has_domain_terms && document_type == DocumentType::Law {
            score *= multipliers.law;
            details.multipliers.push("law".to_string());
        }

        // 6. Canonical source
        if let Some(policy) = &self.config.canonical_source {
            if score > 0.0
                && policy.applies_to(analysis)
                && policy.accepts(&Candidate::of(doc, document_type))
            {
                score = score * multipliers.canonical_source + weights.canonical_bonus;
                details.multipliers.push("canonical_source".to_string());
            }
        }

        // 7. Preferred topic
        if let (Some(preferred), Some(topic)) = (&self.config.preferred_topic, &doc.topic) {
            if score > self.config.topic_align_threshold
                && fold(topic.trim()) == fold(preferred.trim())
            {
                score *= multipliers.topic_align;
                details.multipliers.push("topic_align".to_string());
            }
        }

        // 8. Topic keyword in query
        if document_type.is_topic() && score > 0.0 {
            let asks_for_topic = self
                .config
                .topic_keywords
                .iter()
                .any(|k| contains_word(&folded_query, &fold(k.trim())));
            if asks_for_topic {
                score *= multipliers.topic_keyword;
                details.multipliers.push("topic_keyword".to_string());
            }
        }

        Score {
            value: score,
            details,
        }
    }
}
