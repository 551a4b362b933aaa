//! Declarative predicates for canonical and mandatory sources.
//!
//! Rules are data, not closures, so they can be loaded from configuration,
//! compared and serialized. Text comparisons are case- and accent-insensitive.

use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentType};
use crate::query::text::{contains_word, fold};
use crate::query::QueryAnalysis;
use crate::types::ScoredDocument;

/// Borrowed view of the document fields a [`SourceRule`] can inspect.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub topic: Option<&'a str>,
    pub document_type: DocumentType,
}

impl<'a> Candidate<'a> {
    pub fn of(doc: &'a Document, document_type: DocumentType) -> Self {
        Candidate {
            id: doc.id.as_str(),
            title: &doc.title,
            content: &doc.content,
            topic: doc.topic.as_deref(),
            document_type,
        }
    }
}

impl<'a> From<&'a ScoredDocument> for Candidate<'a> {
    fn from(doc: &'a ScoredDocument) -> Self {
        Candidate {
            id: doc.document_id.as_str(),
            title: &doc.title,
            content: &doc.content,
            topic: doc.topic.as_deref(),
            document_type: doc.document_type,
        }
    }
}

/// Predicate over a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SourceRule {
    TitleContains(String),
    ContentContains(String),
    TopicIs(String),
    IdIs(String),
    TypeIs(DocumentType),
    Any(Vec<SourceRule>),
    All(Vec<SourceRule>),
    Not(Box<SourceRule>),
}

impl SourceRule {
    pub fn matches(&self, candidate: &Candidate<'_>) -> bool {
        match self {
            SourceRule::TitleContains(needle) => fold(candidate.title).contains(&fold(needle)),
            SourceRule::ContentContains(needle) => {
                fold(candidate.content).contains(&fold(needle))
            }
            SourceRule::TopicIs(topic) => candidate
                .topic
                .is_some_and(|t| fold(t.trim()) == fold(topic.trim())),
            SourceRule::IdIs(id) => candidate.id == id.as_str(),
            SourceRule::TypeIs(document_type) => candidate.document_type == *document_type,
            SourceRule::Any(rules) => rules.iter().any(|r| r.matches(candidate)),
            SourceRule::All(rules) => rules.iter().all(|r| r.matches(candidate)),
            SourceRule::Not(rule) => !rule.matches(candidate),
        }
    }
}

/// Predicate over an analyzed query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QueryRule {
    Always,
    /// Substring of the lower-cased query.
    Contains(String),
    /// Any of the given words appears as a whole word.
    AnyWord(Vec<String>),
    HasAnchors,
    HasDomainTerms,
    Any(Vec<QueryRule>),
    All(Vec<QueryRule>),
}

impl QueryRule {
    pub fn matches(&self, analysis: &QueryAnalysis) -> bool {
        match self {
            QueryRule::Always => true,
            QueryRule::Contains(needle) => {
                let needle = fold(needle);
                !needle.is_empty() && fold(&analysis.normalized).contains(&needle)
            }
            QueryRule::AnyWord(words) => {
                let query = fold(&analysis.normalized);
                words.iter().any(|w| contains_word(&query, &fold(w.trim())))
            }
            QueryRule::HasAnchors => analysis.has_anchors(),
            QueryRule::HasDomainTerms => analysis.has_domain_terms,
            QueryRule::Any(rules) => rules.iter().any(|r| r.matches(analysis)),
            QueryRule::All(rules) => rules.iter().all(|r| r.matches(analysis)),
        }
    }
}

/// A source the query may call for: `query` decides whether the policy is
/// active, `document` identifies the source itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePolicy {
    pub query: QueryRule,
    pub document: SourceRule,
}

impl SourcePolicy {
    pub fn new(query: QueryRule, document: SourceRule) -> Self {
        SourcePolicy { query, document }
    }

    /// Policy that is active for every query.
    pub fn always(document: SourceRule) -> Self {
        SourcePolicy {
            query: QueryRule::Always,
            document,
        }
    }

    pub fn applies_to(&self, analysis: &QueryAnalysis) -> bool {
        self.query.matches(analysis)
    }

    pub fn accepts(&self, candidate: &Candidate<'_>) -> bool {
        self.document.matches(candidate)
    }
}
