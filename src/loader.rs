//! Content Loader
//!
//! Locates content documents under the configured root, decodes them, and
//! memoizes the decoded form per owner.

use crate::config::ContentConfig;
use crate::content::{keys, RawContent};
use crate::error::LoadError;
use parking_lot::RwLock;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves content names to files: `<root>/<package>/<name>.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLocator {
    root: PathBuf,
    package: String,
}

impl ContentLocator {
    pub fn new(root: impl Into<PathBuf>, package: impl AsRef<str>) -> Self {
        Self {
            root: root.into(),
            package: crate::config::normalize_package(package.as_ref()),
        }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(config.content_root.clone(), &config.content_package)
    }

    /// Resource name relative to the root, e.g. `/org/app/Greeting.json`.
    pub fn resource_name(&self, content_name: &str) -> String {
        format!("{}{}.{}", self.package, content_name, keys::CONTENT_EXTENSION)
    }

    /// File path for `content_name`. Names that could leave the package
    /// directory are rejected.
    pub fn path_for(&self, content_name: &str) -> Result<PathBuf, LoadError> {
        check_content_name(content_name)?;
        Ok(self
            .root
            .join(self.resource_name(content_name).trim_start_matches('/')))
    }
}

fn check_content_name(content_name: &str) -> Result<(), LoadError> {
    if content_name.is_empty()
        || content_name.contains("..")
        || content_name.starts_with(['/', '\\'])
    {
        return Err(LoadError::InvalidContentName(content_name.to_string()));
    }
    Ok(())
}

/// Reads and decodes content documents.
pub struct ContentLoader;

impl ContentLoader {
    pub fn load(path: &Path) -> Result<RawContent, LoadError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::ContentNotFound(path.to_path_buf()),
            _ => LoadError::Io(e),
        })?;

        let content = RawContent::from_reader(BufReader::new(file), Some(path))?;
        log_loaded(path, &content);
        Ok(content)
    }

    pub fn load_named(locator: &ContentLocator, content_name: &str) -> Result<RawContent, LoadError> {
        Self::load(&locator.path_for(content_name)?)
    }
}

fn log_loaded(path: &Path, content: &RawContent) {
    match (content.selection_nodes(), content.condition_nodes()) {
        (Ok(selection), Ok(condition)) => debug!(
            path = %path.display(),
            selection_nodes = selection.len(),
            condition_nodes = condition.len(),
            "Content loaded"
        ),
        (Err(e), _) | (_, Err(e)) => warn!(
            path = %path.display(),
            error = %e,
            "Content loaded with malformed sections"
        ),
    }
}

/// Lazily decoded, shared content for one owner.
///
/// Concurrent first reads may each decode the file; the first value stored
/// wins and later callers share it.
#[derive(Debug)]
pub struct ContentCache {
    path: PathBuf,
    cached: RwLock<Option<Arc<RawContent>>>,
}

impl ContentCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.read().is_some()
    }

    pub fn get(&self) -> Result<Arc<RawContent>, LoadError> {
        if let Some(content) = self.cached.read().as_ref() {
            return Ok(Arc::clone(content));
        }

        let loaded = Arc::new(ContentLoader::load(&self.path)?);
        let mut slot = self.cached.write();
        Ok(Arc::clone(slot.get_or_insert(loaded)))
    }

    /// Drop the cached document so the next read decodes the file again.
    pub fn invalidate(&self) {
        *self.cached.write() = None;
    }
}
