use serde::{Deserialize, Serialize};

use crate::types::identifiers::DocumentId;

/// A knowledge document supplied by the corpus provider.
///
/// The engine only reads documents; it never mutates or caches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl Document {
    pub fn new(
        id: impl Into<DocumentId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Document {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            topic: None,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }
}

/// Semantic type assigned to a document from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Law,
    GeneralTopic,
    SpecificTopic,
    Regulation,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Law,
        DocumentType::GeneralTopic,
        DocumentType::SpecificTopic,
        DocumentType::Regulation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Law => "law",
            DocumentType::GeneralTopic => "general_topic",
            DocumentType::SpecificTopic => "specific_topic",
            DocumentType::Regulation => "regulation",
        }
    }

    pub fn is_topic(&self) -> bool {
        matches!(self, DocumentType::GeneralTopic | DocumentType::SpecificTopic)
    }
}
