use tracing::debug;

use crate::config::{Candidate, SourcePolicy};
use crate::query::QueryAnalysis;
use crate::types::{DocumentId, ScoredDocument};

/// Truncate `sorted` to `max_results`, then make sure a mandatory source
/// survives the cutoff.
///
/// If the policy is active for the query, no kept document satisfies it, and
/// a lower-ranked scored document does, the best such document is moved to
/// the front and the list is re-truncated, evicting the last entry.
pub fn truncate_with_fallback(
    mut sorted: Vec<ScoredDocument>,
    max_results: usize,
    policy: Option<&SourcePolicy>,
    analysis: &QueryAnalysis,
) -> (Vec<ScoredDocument>, Option<DocumentId>) {
    if max_results == 0 {
        return (Vec::new(), None);
    }
    let cutoff = max_results.min(sorted.len());

    let policy = match policy {
        Some(policy) if policy.applies_to(analysis) => policy,
        _ => {
            sorted.truncate(cutoff);
            return (sorted, None);
        }
    };

    let accepted = |doc: &ScoredDocument| policy.accepts(&Candidate::from(doc));

    if sorted[..cutoff].iter().any(accepted) {
        sorted.truncate(cutoff);
        return (sorted, None);
    }

    let Some(index) = sorted[cutoff..].iter().position(accepted).map(|i| i + cutoff) else {
        sorted.truncate(cutoff);
        return (sorted, None);
    };

    let promoted = sorted.remove(index);
    let promoted_id = promoted.document_id.clone();
    debug!(
        document = %promoted_id,
        score = promoted.relevance_score,
        rank = index,
        "promoting mandatory source past the cutoff"
    );

    sorted.truncate(cutoff);
    sorted.insert(0, promoted);
    sorted.truncate(max_results);

    (sorted, Some(promoted_id))
}
