pub mod loader;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::document::DocumentType;

pub use loader::ConfigError;
pub use rules::{Candidate, QueryRule, SourcePolicy, SourceRule};

/// Additive scoring weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Per query anchor referenced by the document content.
    pub anchor: f64,
    pub named_source: f64,
    /// Per keyword occurrence in the content.
    pub content: f64,
    /// Per keyword occurrence in the title.
    pub title: f64,
    /// The whole query appears in the title.
    pub full_title: f64,
    /// Flat bonus added together with the canonical-source multiplier.
    pub canonical_bonus: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            anchor: 500.0,
            named_source: 200.0,
            content: 3.0,
            title: 15.0,
            full_title: 150.0,
            canonical_bonus: 300.0,
        }
    }
}

/// Multipliers, applied to the running score in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Multipliers {
    pub law: f64,
    pub canonical_source: f64,
    pub topic_align: f64,
    pub topic_keyword: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            law: 1.8,
            canonical_source: 2.2,
            topic_align: 1.3,
            topic_keyword: 1.5,
        }
    }
}

/// Everything the scorer and ranker can be tuned with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub multipliers: Multipliers,
    pub domain_terms: Vec<String>,
    pub law_keywords: Vec<String>,
    /// `(keyword, canonical name)` pairs.
    pub named_source_aliases: Vec<(String, String)>,
    /// Words that mark a query as asking for study topics.
    pub topic_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_source: Option<SourcePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandatory_source: Option<SourcePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_topic: Option<String>,
    /// Score a document must exceed before topic alignment applies.
    pub topic_align_threshold: f64,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            multipliers: Multipliers::default(),
            domain_terms: strings(&[
                "ley",
                "artículo",
                "real decreto",
                "decreto",
                "reglamento",
                "estatuto",
                "constitución",
                "normativa",
                "disposición",
            ]),
            law_keywords: strings(&[
                "ley",
                "real decreto",
                "rd",
                "orden",
                "estatuto",
                "constitución",
            ]),
            named_source_aliases: vec![
                ("lgss".into(), "ley general de la seguridad social".into()),
                ("trebep".into(), "estatuto básico del empleado público".into()),
                ("lpac".into(), "procedimiento administrativo común".into()),
                ("constitución".into(), "constitución española".into()),
            ],
            topic_keywords: strings(&["tema"]),
            canonical_source: None,
            mandatory_source: None,
            preferred_topic: None,
            topic_align_threshold: 50.0,
        }
    }
}

impl ScoringConfig {
    pub fn with_canonical_source(mut self, policy: SourcePolicy) -> Self {
        self.canonical_source = Some(policy);
        self
    }

    pub fn with_mandatory_source(mut self, policy: SourcePolicy) -> Self {
        self.mandatory_source = Some(policy);
        self
    }

    pub fn with_preferred_topic(mut self, topic: impl Into<String>) -> Self {
        self.preferred_topic = Some(topic.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        let m = &self.multipliers;
        let values = [
            ("weights.anchor", w.anchor),
            ("weights.named_source", w.named_source),
            ("weights.content", w.content),
            ("weights.title", w.title),
            ("weights.full_title", w.full_title),
            ("weights.canonical_bonus", w.canonical_bonus),
            ("multipliers.law", m.law),
            ("multipliers.canonical_source", m.canonical_source),
            ("multipliers.topic_align", m.topic_align),
            ("multipliers.topic_keyword", m.topic_keyword),
            ("topic_align_threshold", self.topic_align_threshold),
        ];

        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

/// Character allowance for one document, by type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerTypeCharLimit {
    pub law: usize,
    pub general_topic: usize,
    pub specific_topic: usize,
    pub regulation: usize,
}

impl Default for PerTypeCharLimit {
    fn default() -> Self {
        Self {
            law: 2500,
            general_topic: 1500,
            specific_topic: 1500,
            regulation: 1500,
        }
    }
}

impl PerTypeCharLimit {
    pub fn get(&self, document_type: DocumentType) -> usize {
        match document_type {
            DocumentType::Law => self.law,
            DocumentType::GeneralTopic => self.general_topic,
            DocumentType::SpecificTopic => self.specific_topic,
            DocumentType::Regulation => self.regulation,
        }
    }
}

/// Size limits for the assembled context. All lengths are in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextBudget {
    pub max_total_chars: usize,
    pub per_type_char_limit: PerTypeCharLimit,
    /// Content characters kept in the last-resort block when a full block
    /// no longer fits.
    pub fallback_excerpt_chars: usize,
    pub truncation_marker: String,
}

impl Default for ContextBudget {
    fn default() -> Self {
        Self {
            max_total_chars: 12_000,
            per_type_char_limit: PerTypeCharLimit::default(),
            fallback_excerpt_chars: 300,
            truncation_marker: "\n[...]".to_string(),
        }
    }
}

impl ContextBudget {
    pub fn with_max_total_chars(max_total_chars: usize) -> Self {
        Self {
            max_total_chars,
            ..Self::default()
        }
    }

    pub fn limit_for(&self, document_type: DocumentType) -> usize {
        self.per_type_char_limit.get(document_type)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if DocumentType::ALL.iter().any(|t| self.limit_for(*t) == 0) {
            return Err(ConfigError::Invalid(
                "per_type_char_limit entries must be positive".to_string(),
            ));
        }
        if self.fallback_excerpt_chars == 0 {
            return Err(ConfigError::Invalid(
                "fallback_excerpt_chars must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Full engine configuration: scoring, ranking cutoff and context budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub budget: ContextBudget,
    pub max_results: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            budget: ContextBudget::default(),
            max_results: 5,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::Invalid("max_results must be at least 1".to_string()));
        }
        self.scoring.validate()?;
        self.budget.validate()
    }
}
