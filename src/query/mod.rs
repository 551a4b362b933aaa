pub mod analyzer;
pub mod anchors;
pub mod text;

pub use analyzer::QueryAnalysis;
pub use anchors::{extract_anchors, mentions_anchor};
