//! Content Evaluation
//!
//! Turns (content, attribute set, condition map) into result records:
//! condition nodes are matched first, then selection nodes are filtered by
//! the satisfied ids and projected onto the requested attributes.

pub mod condition;
pub mod evaluator;
pub mod selection;

pub use condition::{compute_satisfied_ids, MatchPolicy};
pub use evaluator::{evaluate, ContentEvaluator, EvaluationRequest, Evaluator};
pub use selection::filter_and_project;
