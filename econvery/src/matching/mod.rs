//! Text and concept matchers used by the component scorer

pub mod concept;
pub mod keyword;

pub use concept::{ConceptMatch, ConceptMatcher, ConceptTargets};
pub use keyword::{ClusterMatch, KeywordMatcher};
