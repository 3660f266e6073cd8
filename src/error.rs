//! Error types for content loading, evaluation and record binding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a single evaluation call.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Precondition violated for `{argument}`: {reason}")]
    Precondition {
        argument: &'static str,
        reason: String,
    },

    #[error("Malformed content: {0}")]
    MalformedContent(String),
}

impl EvaluationError {
    pub(crate) fn precondition(argument: &'static str, reason: impl Into<String>) -> Self {
        EvaluationError::Precondition {
            argument,
            reason: reason.into(),
        }
    }
}

/// A known content key held a value of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Key `{key}` expected {expected}, found {found}")]
pub struct ShapeError {
    pub key: String,
    pub expected: &'static str,
    pub found: &'static str,
}

impl From<ShapeError> for EvaluationError {
    fn from(err: ShapeError) -> Self {
        EvaluationError::MalformedContent(err.to_string())
    }
}

/// Errors raised before the evaluator sees any content.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Content not found: {}", .0.display())]
    ContentNotFound(PathBuf),

    #[error("Failed to parse content{}: {source}", origin_suffix(.origin))]
    ContentParsing {
        origin: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid content name `{0}`: must be non-empty, relative and free of '..'")]
    InvalidContentName(String),

    #[error("Content root must be a JSON object{}", origin_suffix(.origin))]
    NotAnObject { origin: Option<PathBuf> },

    #[error("Content I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn origin_suffix(origin: &Option<PathBuf>) -> String {
    origin
        .as_ref()
        .map(|path| format!(" ({})", path.display()))
        .unwrap_or_default()
}

/// Errors raised while turning result records into typed values.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("Result type mismatch: schema expects `{expected}`, content declares `{found}`")]
    ResultTypeMismatch { expected: String, found: String },

    #[error("Failed to bind record {index}: {source}")]
    Deserialize {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Umbrella error returned by the mapper and the CLI.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Bind(#[from] BindError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ContentError {
    fn from(err: config::ConfigError) -> Self {
        ContentError::ConfigError(err.to_string())
    }
}
