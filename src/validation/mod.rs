pub mod citations;

pub use citations::{unsupported, validate_citations};
