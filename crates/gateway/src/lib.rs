//! Gateway client for clawdeck.
//!
//! This crate wraps the host gateway's HTTP surface: the tool-invoke
//! endpoint used for status and health checks, and the chat-completions
//! endpoint behind the send-message and run-task actions.
//!
//! # Overview
//!
//! - [`client`]: the async [`GatewayClient`]
//! - [`status`]: the [`StatusSnapshot`] read passively at render time
//! - [`error`]: error types for gateway operations

pub mod client;
pub mod error;
pub mod status;

pub use client::GatewayClient;
pub use error::{Error, Result};
pub use status::StatusSnapshot;
