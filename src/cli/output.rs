//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ContentError, EvaluationError, LoadError};

/// Map domain errors to a one-line message for stderr, prefixed by category.
pub fn map_error(e: &ContentError) -> String {
    let category = match e {
        ContentError::Evaluation(EvaluationError::Precondition { .. }) => "invalid arguments",
        ContentError::Evaluation(EvaluationError::MalformedContent(_)) => "malformed content",
        ContentError::Load(LoadError::ContentNotFound(_)) => "content not found",
        ContentError::Load(LoadError::InvalidContentName(_)) => "invalid arguments",
        ContentError::Load(_) => "content unreadable",
        ContentError::Bind(_) => "binding failed",
        ContentError::ConfigError(_) => "configuration",
        ContentError::Render(_) => "output",
    };
    format!("error ({}): {}", category, e)
}
