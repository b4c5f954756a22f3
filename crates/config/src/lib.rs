//! Configuration management for clawdeck.
//!
//! This crate handles loading, validation, and persistence of the card
//! and gateway configuration.
//!
//! # Overview
//!
//! - [`config`]: the [`Config`] struct and its card/gateway sections
//! - [`persistence`]: JSON5/JSON file discovery, reading, and writing
//! - [`error`]: error types for configuration operations

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{BoardConfig, Config, GatewayConfig, PromptConfig};
pub use error::{ConfigError, Result};
