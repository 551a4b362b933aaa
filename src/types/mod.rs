pub mod context_bundle;
pub mod identifiers;

pub use context_bundle::{
    AssembledContext, AssemblyMetadata, CitationFinding, RankedResult, ScoreDetails,
    ScoredDocument,
};
pub use identifiers::{ContextVersion, DocumentId};
