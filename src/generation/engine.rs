use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::document::Document;
use crate::query::QueryAnalysis;
use crate::selection::{assemble, ContextSelector, HeuristicScorer};
use crate::types::{AssembledContext, CitationFinding, RankedResult};
use crate::validation::{unsupported, validate_citations};

use super::{ChatMessage, CorpusError, CorpusProvider, GenerationAdapter, GenerationError};

/// Everything computed before the generator is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retrieval {
    pub analysis: QueryAnalysis,
    pub ranked: RankedResult,
    pub context: AssembledContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub retrieval: Retrieval,
    pub text: String,
    pub citations: Vec<CitationFinding>,
    pub generated_at: DateTime<Utc>, // informational only
}

impl Answer {
    pub fn unsupported_citations(&self) -> Vec<&CitationFinding> {
        unsupported(&self.citations).collect()
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// The generator failed; the retrieval that fed it is kept for diagnostics.
    #[error("Generation failed: {source}")]
    GenerationFailed {
        #[source]
        source: GenerationError,
        retrieval: Box<Retrieval>,
    },

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}

impl EngineError {
    pub fn retrieval(&self) -> Option<&Retrieval> {
        match self {
            EngineError::GenerationFailed { retrieval, .. } => Some(retrieval.as_ref()),
            EngineError::Corpus(_) => None,
        }
    }
}

/// Query → rank → assemble → generate → validate, with the generator
/// injected at construction.
pub struct RetrievalEngine<G> {
    selector: ContextSelector<HeuristicScorer>,
    config: EngineConfig,
    adapter: G,
}

impl<G> RetrievalEngine<G>
where
    G: GenerationAdapter,
{
    pub fn new(config: EngineConfig, adapter: G) -> Self {
        Self {
            selector: ContextSelector::from_config(config.scoring.clone()),
            config,
            adapter,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn adapter(&self) -> &G {
        &self.adapter
    }

    /// Rank `documents` for `query` and assemble the context window.
    /// Deterministic for identical inputs.
    pub fn retrieve(&self, query: &str, documents: &[Document]) -> Retrieval {
        let analysis = self.selector.analyze(query);
        let ranked = self
            .selector
            .rank_analyzed(&analysis, documents, self.config.max_results);
        let context = assemble(&ranked, &analysis, &self.config.budget);

        info!(
            considered = ranked.documents_considered,
            ranked = ranked.len(),
            included = context.included_document_ids.len(),
            chars = context.total_chars,
            budget = self.config.budget.max_total_chars,
            version = %context.version.as_str(),
            "context assembled"
        );

        Retrieval {
            analysis,
            ranked,
            context,
        }
    }

    pub fn answer(
        &self,
        query: &str,
        documents: &[Document],
        history: &[ChatMessage],
    ) -> Result<Answer, EngineError> {
        let retrieval = self.retrieve(query, documents);

        let text = match self
            .adapter
            .generate(&retrieval.context.text, query, history)
        {
            Ok(text) => text,
            Err(source) => {
                warn!(error = %source, "generation failed");
                return Err(EngineError::GenerationFailed {
                    source,
                    retrieval: Box::new(retrieval),
                });
            }
        };

        let citations = validate_citations(&text, &retrieval.context);
        for finding in unsupported(&citations) {
            warn!(anchor = %finding.anchor, "generated text cites an article missing from the context");
        }
        debug!(citations = citations.len(), "citations validated");

        Ok(Answer {
            retrieval,
            text,
            citations,
            generated_at: Utc::now(),
        })
    }

    /// Fetch the corpus from `provider`, then [`answer`](Self::answer).
    pub fn answer_from<P>(
        &self,
        provider: &P,
        filter_hint: Option<&str>,
        query: &str,
        history: &[ChatMessage],
    ) -> Result<Answer, EngineError>
    where
        P: CorpusProvider + ?Sized,
    {
        let documents = provider.fetch_corpus(filter_hint)?;
        debug!(documents = documents.len(), ?filter_hint, "corpus fetched");
        self.answer(query, &documents, history)
    }
}
