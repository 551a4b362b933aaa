//! Boundary with the outside world: the corpus provider and the text
//! generator. Both are injected collaborators; this is the only place where
//! I/O, timeouts and failures can occur.

pub mod engine;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;

pub use engine::{Answer, EngineError, Retrieval, RetrievalEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of prior conversation passed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Generation timed out after {0} ms")]
    Timeout(u64),

    #[error("Model error: {0}")]
    Model(String),
}

/// Text generator that answers a query using the supplied context.
pub trait GenerationAdapter: Send + Sync {
    fn generate(
        &self,
        context: &str,
        query: &str,
        history: &[ChatMessage],
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, Error)]
#[error("Corpus provider failed: {0}")]
pub struct CorpusError(pub String);

/// Source of the document corpus snapshot for one request.
pub trait CorpusProvider: Send + Sync {
    fn fetch_corpus(&self, filter_hint: Option<&str>) -> Result<Vec<Document>, CorpusError>;
}

impl CorpusProvider for Vec<Document> {
    fn fetch_corpus(&self, _filter_hint: Option<&str>) -> Result<Vec<Document>, CorpusError> {
        Ok(self.clone())
    }
}
