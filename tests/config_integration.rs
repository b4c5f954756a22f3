//! Integration tests for the clawdeck-config crate.

use std::fs;

use clawdeck_config::{BoardConfig, Config, GatewayConfig, PromptConfig};
use tempfile::TempDir;

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("clawdeck.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for clawdeck
            gateway: {
                base_url: "http://gw.local:8080",
                api_token: "tok_test_token",
            },
            prompt: {
                title: "Ops Board",
                board_url: "http://gw.local:8080/board",
            },
            board: {
                storage_key: "ops",
            },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.gateway.base_url, "http://gw.local:8080");
    assert_eq!(config.gateway.api_token, "tok_test_token");
    // Absent fields keep their defaults
    assert_eq!(config.gateway.agent_id, "main");
    assert_eq!(config.prompt.title, "Ops Board");
    assert_eq!(config.prompt.icon, "mdi:robot-outline");
    assert_eq!(config.prompt.board_url, "http://gw.local:8080/board");
    assert_eq!(config.board.storage_key, "ops");
    assert!(config.board.remote_sync);
}

#[tokio::test]
async fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");

    let original = Config {
        gateway: GatewayConfig {
            base_url: "http://127.0.0.1:18789".to_string(),
            api_token: "tok_secret".to_string(),
            agent_id: "kitchen".to_string(),
        },
        prompt: PromptConfig {
            title: "Kitchen".to_string(),
            quick_actions: vec!["Lights off".to_string()],
            ..PromptConfig::default()
        },
        board: BoardConfig {
            storage_key: "kitchen-board".to_string(),
            remote_sync: true,
        },
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[tokio::test]
async fn config_load_nonexistent_file_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(result.is_err());
}

#[tokio::test]
async fn config_load_rejects_invalid_combination() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("clawdeck.json5");

    // remote_sync on (the default) with no gateway URL
    fs::write(&config_path, r#"{ prompt: { title: "Broken" } }"#).unwrap();

    assert!(Config::load_from(&config_path).is_err());
}

#[test]
fn local_only_board_needs_no_gateway() {
    let config = Config {
        board: BoardConfig {
            remote_sync: false,
            ..BoardConfig::default()
        },
        ..Config::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn config_round_trips_through_plain_json() {
    let config = Config::default();
    let json = serde_json::to_string(&config).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["board"]["storage_key"], "kanban");
    assert_eq!(parsed["prompt"]["title"], "OpenClaw Board");

    let reloaded: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(config, reloaded);
}
