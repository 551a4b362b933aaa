use tracing::debug;

use crate::config::ContextBudget;
use crate::query::anchors::{first_mention_of, mentions};
use crate::query::text::{char_len, take_chars};
use crate::query::QueryAnalysis;
use crate::types::{AssembledContext, AssemblyMetadata, ContextVersion, RankedResult, ScoredDocument};

/// Pack ranked documents, in rank order, into a single context string of at
/// most `budget.max_total_chars` characters.
///
/// When the query names anchors, each document contributes the section that
/// starts at its first reference to one of them; otherwise a plain prefix.
/// The first document whose full block does not fit gets a short excerpt
/// block instead, clipped to what is left, and assembly stops there.
pub fn assemble(
    ranked: &RankedResult,
    analysis: &QueryAnalysis,
    budget: &ContextBudget,
) -> AssembledContext {
    let max_chars = budget.max_total_chars;
    let mut text = String::new();
    let mut total_chars = 0;
    let mut included_document_ids = Vec::new();
    let mut documents_windowed = 0;
    let mut fallback_excerpt_used = false;

    for doc in &ranked.documents {
        if total_chars >= max_chars {
            break;
        }

        let limit = budget.limit_for(doc.document_type);
        let (snippet, windowed) = extract_snippet(&doc.content, &analysis.anchors, limit);
        let block = format_block(
            doc,
            doc.document_type.as_str(),
            snippet,
            snippet.len() < doc.content.len(),
            &budget.truncation_marker,
        );
        let block_chars = char_len(&block);

        if total_chars + block_chars <= max_chars {
            text.push_str(&block);
            total_chars += block_chars;
            included_document_ids.push(doc.document_id.clone());
            if windowed {
                documents_windowed += 1;
            }
            continue;
        }

        // Last resort: title and a short excerpt, then stop.
        let excerpt = take_chars(&doc.content, budget.fallback_excerpt_chars);
        let fallback = format_block(
            doc,
            "excerpt",
            excerpt,
            excerpt.len() < doc.content.len(),
            &budget.truncation_marker,
        );
        let clipped = take_chars(&fallback, max_chars - total_chars);
        if !clipped.is_empty() {
            text.push_str(clipped);
            total_chars += char_len(clipped);
            included_document_ids.push(doc.document_id.clone());
            fallback_excerpt_used = true;
        }
        debug!(
            document = %doc.document_id,
            block_chars,
            remaining = max_chars - total_chars,
            "context budget exhausted"
        );
        break;
    }

    let documents_omitted_by_budget = ranked.documents.len() - included_document_ids.len();

    debug_assert!(total_chars <= max_chars);
    debug_assert_eq!(total_chars, char_len(&text));

    AssembledContext {
        version: ContextVersion::from_text(&text),
        assembly: AssemblyMetadata {
            budget: max_chars,
            documents_ranked: ranked.documents.len(),
            documents_included: included_document_ids.len(),
            documents_windowed,
            documents_omitted_by_budget,
            fallback_excerpt_used,
        },
        text,
        included_document_ids,
        total_chars,
    }
}

/// Section of `content` relevant to the query anchors, capped at
/// `limit` characters. The flag tells whether an anchor window was used.
fn extract_snippet<'a>(content: &'a str, anchors: &[String], limit: usize) -> (&'a str, bool) {
    if let Some(first) = first_mention_of(content, anchors) {
        let end = mentions(&content[first.end..])
            .next()
            .map_or(content.len(), |next| first.end + next.start);
        return (take_chars(&content[first.start..end], limit), true);
    }
    (take_chars(content, limit), false)
}

fn format_block(
    doc: &ScoredDocument,
    label: &str,
    snippet: &str,
    truncated: bool,
    marker: &str,
) -> String {
    let marker = if truncated { marker } else { "" };
    format!("=== {} ({label}) ===\n{snippet}{marker}\n\n", doc.title)
}
