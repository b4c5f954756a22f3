//! Core configuration struct and loading logic.
//!
//! Options are a flat set of named values merged over documented
//! defaults: any field absent from the file keeps its default. The
//! configuration is read once at startup and is immutable for the
//! lifetime of the cards.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

fn default_title() -> String {
    "OpenClaw Board".to_string()
}

fn default_icon() -> String {
    "mdi:robot-outline".to_string()
}

fn default_quick_actions() -> Vec<String> {
    vec![
        "Status check".to_string(),
        "Create Kanban task".to_string(),
        "Summarize updates".to_string(),
    ]
}

fn default_storage_key() -> String {
    "kanban".to_string()
}

fn default_remote_sync() -> bool {
    true
}

fn default_agent_id() -> String {
    "main".to_string()
}

/// Options for the prompt card.
///
/// # Examples
///
/// ```
/// use clawdeck_config::PromptConfig;
///
/// let prompt = PromptConfig::default();
/// assert_eq!(prompt.title, "OpenClaw Board");
/// assert_eq!(prompt.quick_actions.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Title text shown in the card header.
    pub title: String,
    /// Icon identifier shown next to the title.
    pub icon: String,
    /// External board link. Empty disables the open-board shortcut.
    pub board_url: String,
    /// Labels for the quick-action shortcut buttons.
    pub quick_actions: Vec<String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            icon: default_icon(),
            board_url: String::new(),
            quick_actions: default_quick_actions(),
        }
    }
}

/// Options for the Kanban board card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Storage key the task collection is persisted under.
    pub storage_key: String,
    /// Whether board mutations are mirrored to the gateway as
    /// best-effort run-task notifications.
    pub remote_sync: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            remote_sync: default_remote_sync(),
        }
    }
}

/// Connection settings for the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the gateway HTTP endpoint.
    pub base_url: String,
    /// Bearer token for gateway requests.
    pub api_token: String,
    /// Agent the chat endpoint routes messages to.
    pub agent_id: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_token: String::new(),
            agent_id: default_agent_id(),
        }
    }
}

/// The main configuration struct for clawdeck.
///
/// # Examples
///
/// ```
/// use clawdeck_config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.board.storage_key, "kanban");
/// assert!(config.board.remote_sync);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gateway connection settings.
    pub gateway: GatewayConfig,
    /// Prompt card options.
    pub prompt: PromptConfig,
    /// Kanban board card options.
    pub board: BoardConfig,
}

impl Config {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches `./clawdeck.json5`, `./clawdeck.json`, then the user
    /// config directory. If no file is found, returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use clawdeck_config::Config;
    ///
    /// # fn main() -> clawdeck_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("storage key: {}", config.board.storage_key);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or
    /// validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// Remote sync needs a gateway to talk to, so an empty
    /// `gateway.base_url` is rejected while `board.remote_sync` is on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingGatewayUrl`] on violation.
    pub fn validate(&self) -> Result<()> {
        if self.board.remote_sync && self.gateway.base_url.trim().is_empty() {
            return Err(ConfigError::MissingGatewayUrl);
        }
        Ok(())
    }
}
