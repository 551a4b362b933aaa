use crate::document::DocumentType;
use crate::query::text::{char_len, contains_word, contains_word_start, fold};

/// Law keywords up to this many characters must match a whole word ("rd").
const WHOLE_WORD_MAX_CHARS: usize = 2;

/// Assigns a [`DocumentType`] from a document title.
///
/// Only the title is inspected, so classification cost does not grow with
/// content size. Rules are checked in order and the first match wins:
/// "tema" + "general", "tema" + "específico", any law keyword, otherwise
/// regulation. Terms match at the start of a word, so "Temario general" and
/// "Leyes de ..." are recognised.
#[derive(Debug, Clone)]
pub struct DocumentClassifier {
    law_keywords: Vec<String>,
}

impl DocumentClassifier {
    pub fn new(law_keywords: &[String]) -> Self {
        Self {
            law_keywords: law_keywords
                .iter()
                .map(|k| fold(k.trim()))
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn classify(&self, title: &str) -> DocumentType {
        let title = fold(title);
        let is_topic = contains_word_start(&title, "tema");

        if is_topic && contains_word_start(&title, "general") {
            DocumentType::GeneralTopic
        } else if is_topic && contains_word_start(&title, "especific") {
            DocumentType::SpecificTopic
        } else if self.law_keywords.iter().any(|k| matches_law_keyword(&title, k)) {
            DocumentType::Law
        } else {
            DocumentType::Regulation
        }
    }
}

fn matches_law_keyword(title: &str, keyword: &str) -> bool {
    if char_len(keyword) <= WHOLE_WORD_MAX_CHARS {
        contains_word(title, keyword)
    } else {
        contains_word_start(title, keyword)
    }
}
