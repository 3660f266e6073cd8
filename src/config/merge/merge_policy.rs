//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("content_root", crate::config::DEFAULT_CONTENT_ROOT)?
        .set_default("content_package", "")?
        .set_default("mapper_suffix", crate::config::DEFAULT_MAPPER_SUFFIX)
}
