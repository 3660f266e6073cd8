//! contentmap: Data-Driven Content Selection
//!
//! Content documents are JSON decision tables. A document lists candidate
//! records (`selectionNodes`) and named condition bundles (`conditionNodes`);
//! evaluating it against the caller's attributes and conditions yields the
//! records whose activating condition is satisfied, projected onto the
//! requested attributes.

pub mod binder;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod eval;
pub mod loader;
pub mod logging;
pub mod mapper;
pub mod types;

pub use binder::RecordSchema;
pub use content::RawContent;
pub use error::{BindError, ContentError, EvaluationError, LoadError, ShapeError};
pub use eval::{evaluate, ContentEvaluator, EvaluationRequest, Evaluator, MatchPolicy};
pub use mapper::{ContentMapper, Mapper};
pub use types::{AttributeSet, ConditionMap, ResultRecord};
