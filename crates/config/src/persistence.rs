//! Configuration file discovery, reading, and writing.
//!
//! Files are accepted in JSON5 (comments, trailing commas) or plain
//! JSON on read, and written back as pretty-printed JSON. Discovery
//! checks the working directory first (`clawdeck.json5`, then
//! `clawdeck.json`), then the user config directory
//! (`~/.config/clawdeck/config.json5`, then `config.json`).

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// File names probed in the working directory, in priority order.
const LOCAL_FILES: &[&str] = &["clawdeck.json5", "clawdeck.json"];

/// Subdirectory of the user config directory.
const USER_DIR: &str = "clawdeck";

/// File names probed in the user config directory, in priority order.
const USER_FILES: &[&str] = &["config.json5", "config.json"];

/// Returns the first configuration file that exists, if any.
///
/// # Examples
///
/// ```no_run
/// use clawdeck_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = LOCAL_FILES.iter().map(PathBuf::from);
    let user = dirs::config_dir().into_iter().flat_map(|dir| {
        let dir = dir.join(USER_DIR);
        USER_FILES.iter().map(move |name| dir.join(name))
    });

    local.chain(user).find(|path| path.exists())
}

/// Reads and parses a configuration file (JSON5 or JSON).
///
/// Parsing only; validation happens in [`Config::load_from`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot
/// be parsed.
pub fn read_config_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file as pretty-printed JSON, creating
/// parent directories as needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the
/// file cannot be written, or the value cannot be serialized.
pub fn write_config_file(path: impl AsRef<Path>, config: &Config) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_plain_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clawdeck.json");
        std::fs::write(
            &path,
            r#"{"gateway": {"base_url": "http://gw.local:8080"}}"#,
        )
        .unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.gateway.base_url, "http://gw.local:8080");
        // Untouched sections keep their defaults
        assert_eq!(config.board.storage_key, "kanban");
    }

    #[test]
    fn read_json5_with_comments_and_trailing_commas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clawdeck.json5");
        std::fs::write(
            &path,
            r#"
            {
                // Card shown in the hallway dashboard
                prompt: {
                    title: "Hallway",
                    quick_actions: ["Lights off",],
                },
            }
            "#,
        )
        .unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.prompt.title, "Hallway");
        assert_eq!(config.prompt.quick_actions, vec!["Lights off"]);
    }

    #[test]
    fn read_missing_file_is_an_error() {
        assert!(read_config_file("/nonexistent/clawdeck.json").is_err());
    }

    #[test]
    fn read_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "gateway = nope").unwrap();

        assert!(read_config_file(&path).is_err());
    }

    #[test]
    fn write_then_read_preserves_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.json");

        let mut original = Config::new();
        original.gateway.base_url = "http://127.0.0.1:18789".to_string();
        original.board.storage_key = "hallway".to_string();

        write_config_file(&path, &original).unwrap();
        let loaded = read_config_file(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dirs").join("config.json");

        write_config_file(&path, &Config::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn written_file_is_plain_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.json");

        write_config_file(&path, &Config::new()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["prompt"]["title"], "OpenClaw Board");
    }
}
