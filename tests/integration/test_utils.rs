//! Shared test utilities for integration tests

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that read or write XDG_CONFIG_HOME / HOME.
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with XDG_CONFIG_HOME and HOME pointing into a fresh temp dir,
/// restoring both afterwards.
pub fn with_isolated_config_home<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original_home = std::env::var("HOME").ok();
    let original_xdg = std::env::var("XDG_CONFIG_HOME").ok();

    let temp_dir = TempDir::new().unwrap();
    let xdg = temp_dir.path().join("xdg");
    std::fs::create_dir_all(&xdg).unwrap();
    std::env::set_var("HOME", temp_dir.path());
    std::env::set_var("XDG_CONFIG_HOME", &xdg);

    let result = f(&xdg);

    match original_home {
        Some(value) => std::env::set_var("HOME", value),
        None => std::env::remove_var("HOME"),
    }
    match original_xdg {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
    result
}

/// Write `json` as `<root>/<package>/<name>.json` and return its path.
pub fn write_content(root: &Path, package: &str, name: &str, json: &str) -> PathBuf {
    let dir = root.join(package);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{}.json", name));
    std::fs::write(&path, json).unwrap();
    path
}

/// Two role-gated selection nodes plus one unconditional node.
pub const ROLE_CONTENT: &str = r#"{
    "meta": {"resultType": "Banner"},
    "selectionNodes": [
        {"node": {"conditionId": "", "msg": "hello", "title": "Welcome"}},
        {"node": {"conditionId": "c1", "msg": "hi admin", "title": "Admin"}},
        {"node": {"conditionId": "c2", "msg": "hi guest"}}
    ],
    "conditionNodes": [
        {"node": {"conditionId": "c1", "conditions": [
            {"keyName": "role", "operator": "=", "operand": "admin"}]}},
        {"node": {"conditionId": "c2", "conditions": [
            {"keyName": "role", "operator": "=", "operand": "guest"}]}}
    ]
}"#;
