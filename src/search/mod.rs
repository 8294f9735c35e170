//! Search module - provides the matching primitives, does not control flow
//!
//! Pipeline: raw query → normalize → parse structured filters → two-stage
//! catalog search → per-cell highlight mask. Every function here is pure
//! and total over its inputs; zero results is an outcome, not an error.

pub mod engine;
pub mod highlight;
pub mod normalize;
pub mod parser;


pub use engine::{CatalogSearcher, MatchStage, SearchOutcome};
pub use highlight::{highlight, HighlightMask};
pub use normalize::normalize;
pub use parser::{ParsedQuery, QueryParser};
