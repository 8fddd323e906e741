//! novel-editor configuration management.

use anyhow::{Context, Result};
use chapter_split::library::DEFAULT_INPUT_DIR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

// Novels routinely exceed axum's 2 MiB default body limit.
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Directory holding the `.txt` novels offered to the editor
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Address the HTTP API binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Allow cross-origin requests from the browser client
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,

    /// Maximum accepted request body size
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_DIR)
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_cors_enabled() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            listen_addr: default_listen_addr(),
            cors_enabled: default_cors_enabled(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl EditorConfig {
    /// Get the config file path: ~/.config/novel-splitter/editor.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Neither HOME nor USERPROFILE is set")?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("novel-splitter")
            .join("editor.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("input-txt"));
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert!(config.cors_enabled);
        assert_eq!(config.max_body_bytes, 64 * 1024 * 1024);
    }

    #[test]
    fn test_config_path() {
        let path = EditorConfig::config_path().unwrap();
        assert!(path.ends_with("novel-splitter/editor.toml"));
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
input_dir = "/srv/novels"
listen_addr = "0.0.0.0:8080"
cors_enabled = false
max_body_bytes = 1024
"#;
        let config: EditorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/srv/novels"));
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert!(!config.cors_enabled);
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: EditorConfig = toml::from_str("").unwrap();
        assert_eq!(config.input_dir, PathBuf::from("input-txt"));
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert!(config.cors_enabled);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = EditorConfig {
            listen_addr: "127.0.0.1:9999".to_string(),
            ..EditorConfig::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: EditorConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.listen_addr, "127.0.0.1:9999");
        assert_eq!(parsed.input_dir, config.input_dir);
    }
}
