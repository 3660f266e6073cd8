//! Integration tests for the layered configuration.

use contentmap::config::{ConfigLoader, WORKSPACE_CONFIG_FILE};
use std::path::PathBuf;
use tempfile::TempDir;

use super::test_utils::with_isolated_config_home;

#[test]
fn test_defaults_without_any_file() {
    with_isolated_config_home(|_| {
        let workspace = TempDir::new().unwrap();
        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.content_root, workspace.path().join("content"));
        assert_eq!(config.mapper_suffix, "Mapper");
        assert_eq!(config.content_package(), "");
    });
}

#[test]
fn test_environment_overrides_workspace_file() {
    with_isolated_config_home(|_| {
        let workspace = TempDir::new().unwrap();
        std::fs::write(
            workspace.path().join(WORKSPACE_CONFIG_FILE),
            "content_root = \"/srv/content\"\ncontent_package = \"org/app\"\n",
        )
        .unwrap();

        std::env::set_var("CONTENTMAP_CONTENT_PACKAGE", "org/env");
        let loaded = ConfigLoader::load(workspace.path());
        std::env::remove_var("CONTENTMAP_CONTENT_PACKAGE");

        let config = loaded.unwrap();
        assert_eq!(config.content_root, PathBuf::from("/srv/content"));
        assert_eq!(config.content_package(), "/org/env/");
    });
}

#[test]
fn test_global_file_under_xdg() {
    with_isolated_config_home(|xdg| {
        std::fs::create_dir_all(xdg.join("contentmap")).unwrap();
        std::fs::write(
            xdg.join("contentmap").join("config.toml"),
            "[logging]\nlevel = \"debug\"\nformat = \"json\"\n",
        )
        .unwrap();

        let workspace = TempDir::new().unwrap();
        let config = ConfigLoader::load(workspace.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    });
}
