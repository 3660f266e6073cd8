//! Configuration System
//!
//! Where content documents live and how mapper names translate into content
//! names. Layered with the `config` crate: built-in defaults, then the global
//! file, then the workspace `contentmap.toml`, then `CONTENTMAP_*`
//! environment variables.

use crate::error::ContentError;
use crate::logging::LoggingConfig;
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

pub(crate) const DEFAULT_CONTENT_ROOT: &str = "content";
pub(crate) const DEFAULT_MAPPER_SUFFIX: &str = "Mapper";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding content documents
    #[serde(default = "default_content_root")]
    pub content_root: PathBuf,

    /// Package (sub-directory) prefix for content names, e.g. `org/app`
    #[serde(default)]
    pub content_package: String,

    /// Suffix stripped from mapper names to infer content names
    #[serde(default = "default_mapper_suffix")]
    pub mapper_suffix: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_content_root() -> PathBuf {
    PathBuf::from(DEFAULT_CONTENT_ROOT)
}

fn default_mapper_suffix() -> String {
    DEFAULT_MAPPER_SUFFIX.to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_root: default_content_root(),
            content_package: String::new(),
            mapper_suffix: default_mapper_suffix(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ContentConfig {
    /// Content package with exactly one leading and one trailing `/`, or the
    /// empty string when no package is configured.
    pub fn content_package(&self) -> String {
        normalize_package(&self.content_package)
    }

    /// Infer a content name from a mapper name: `GreetingMapper` -> `Greeting`.
    pub fn content_name_for(&self, mapper_name: &str) -> String {
        if self.mapper_suffix.is_empty() {
            return mapper_name.to_string();
        }
        mapper_name
            .strip_suffix(self.mapper_suffix.as_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or(mapper_name)
            .to_string()
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.content_root.as_os_str().is_empty() {
            return Err(ContentError::ConfigError(
                "content_root cannot be empty".to_string(),
            ));
        }
        if self.content_package.contains("..") {
            return Err(ContentError::ConfigError(format!(
                "content_package must not contain '..': {}",
                self.content_package
            )));
        }
        Ok(())
    }
}

/// Normalize a package name to `/a/b/` form; empty stays empty.
pub fn normalize_package(package: &str) -> String {
    if package.is_empty() {
        return String::new();
    }

    let mut normalized = String::with_capacity(package.len() + 2);
    if !package.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(package);
    if !package.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Loads [`ContentConfig`] from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for `workspace_root`.
    pub fn load(workspace_root: &Path) -> Result<ContentConfig, ConfigError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = sources::environment::add_to_builder(builder);

        let mut config: ContentConfig = builder.build()?.try_deserialize()?;
        if config.content_root.is_relative() {
            config.content_root = workspace_root.join(&config.content_root);
        }
        Ok(config)
    }

    /// Load configuration from a single file, bypassing the layered lookup.
    pub fn load_from_file(path: &Path) -> Result<ContentConfig, ConfigError> {
        merge::merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }
}
