//! CLI route: run context and the single route table. Dispatches to the
//! loader, the evaluator and presentation.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{format_inspect_text, format_records_json, format_records_text};
use crate::config::{ConfigLoader, ContentConfig};
use crate::content::RawContent;
use crate::error::{ContentError, EvaluationError};
use crate::eval::{ContentEvaluator, EvaluationRequest, Evaluator, MatchPolicy};
use crate::loader::{ContentLoader, ContentLocator};
use crate::types::{attribute_set, condition_map};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace root and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ContentConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ContentError> {
        let config = match config_path {
            Some(ref path) => {
                let mut config = ConfigLoader::load_from_file(path)?;
                if config.content_root.is_relative() {
                    config.content_root = workspace_root.join(&config.content_root);
                }
                config
            }
            None => ConfigLoader::load(&workspace_root)?,
        };
        config.validate()?;
        debug!(
            workspace = %workspace_root.display(),
            content_root = %config.content_root.display(),
            "Run context ready"
        );

        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ContentError> {
        match command {
            Commands::Eval {
                content,
                name,
                attributes,
                conditions,
                strict,
                format,
            } => {
                let document = self.load(content.as_deref(), name.as_deref())?;
                let attributes = attribute_set(attributes.iter().cloned());
                let conditions = condition_map(conditions.iter().cloned());
                let policy = if *strict {
                    MatchPolicy::Strict
                } else {
                    MatchPolicy::Partial
                };

                let records = ContentEvaluator::new(EvaluationRequest {
                    content: &document,
                    attributes: &attributes,
                    conditions: Cow::Owned(conditions),
                    policy,
                })
                .evaluate()?;
                info!(records = records.len(), ?policy, "Evaluation finished");

                match format {
                    OutputFormat::Json => format_records_json(&records),
                    OutputFormat::Text => Ok(format_records_text(&records)),
                }
            }
            Commands::Inspect { content, name } => {
                let document = self.load(content.as_deref(), name.as_deref())?;
                format_inspect_text(&document)
                    .map_err(|e| ContentError::Evaluation(EvaluationError::from(e)))
            }
        }
    }

    /// Explicit file paths resolve against the working directory; names
    /// resolve under the configured root and package.
    fn load(&self, path: Option<&Path>, name: Option<&str>) -> Result<RawContent, ContentError> {
        let document = match (path, name) {
            (Some(path), _) => ContentLoader::load(path)?,
            (None, Some(name)) => {
                ContentLoader::load_named(&ContentLocator::from_config(&self.config), name)?
            }
            (None, None) => {
                return Err(EvaluationError::precondition(
                    "content",
                    "either --content or --name is required",
                )
                .into())
            }
        };
        Ok(document)
    }
}
