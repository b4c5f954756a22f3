//! Gateway HTTP client implementation.
//!
//! This module provides the [`GatewayClient`] struct for invoking the
//! remote actions the cards depend on: sending a chat message, running
//! a task, refreshing status, and health-checking the gateway.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::status::StatusSnapshot;

/// Path of the tool-invoke endpoint.
const TOOLS_ENDPOINT: &str = "/tools/invoke";

/// Path of the chat-completions endpoint.
const CHAT_ENDPOINT: &str = "/v1/chat/completions";

/// Session key attached to every tool invocation.
const SESSION_KEY: &str = "main";

/// Request timeout for tool invocations.
const TOOL_TIMEOUT: Duration = Duration::from_secs(15);

/// Request timeout for chat completions, which can run an agent turn.
const CHAT_TIMEOUT: Duration = Duration::from_secs(45);

/// HTTP client for the gateway's remote action bus.
///
/// All calls are asynchronous and return a result the caller converts
/// to a human-readable status line; nothing here retries.
///
/// # Security
///
/// The API token is stored as a [`SecretString`] to keep it out of
/// debug output and logs.
///
/// # Examples
///
/// ```no_run
/// use clawdeck_gateway::GatewayClient;
///
/// # async fn example() -> clawdeck_gateway::Result<()> {
/// let client = GatewayClient::new("http://gw.local:8080", "token", "main");
/// let snapshot = client.status().await?;
/// println!("gateway is {}", snapshot.state_label());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GatewayClient {
    base_url: String,
    token: SecretString,
    agent_id: String,
    http: reqwest::Client,
}

impl GatewayClient {
    /// Creates a new gateway client.
    ///
    /// The base URL may carry a trailing slash; it is normalized away.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: SecretString::from(api_token.into()),
            agent_id: agent_id.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }

    /// Invokes a named gateway tool with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway answers
    /// with a non-success status code.
    #[instrument(skip(self, args), fields(tool = tool))]
    pub async fn invoke_tool(&self, tool: &str, args: Value) -> Result<Value> {
        let payload = json!({
            "tool": tool,
            "args": args,
            "sessionKey": SESSION_KEY,
        });

        debug!("invoking gateway tool");
        let response = self
            .http
            .post(self.url(TOOLS_ENDPOINT))
            .header("Authorization", self.bearer())
            .json(&payload)
            .timeout(TOOL_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status().as_u16(),
                endpoint: TOOLS_ENDPOINT.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Sends text through the gateway's chat-completions endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the gateway answers
    /// with a non-success status code.
    #[instrument(skip(self, text))]
    pub async fn chat(&self, text: &str) -> Result<Value> {
        let payload = json!({
            "model": "openclaw",
            "messages": [{ "role": "user", "content": text }],
            "stream": false,
        });

        debug!("sending chat completion");
        let response = self
            .http
            .post(self.url(CHAT_ENDPOINT))
            .header("Authorization", self.bearer())
            .header("x-openclaw-agent-id", &self.agent_id)
            .json(&payload)
            .timeout(CHAT_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status().as_u16(),
                endpoint: CHAT_ENDPOINT.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Sends a chat message from the prompt card.
    ///
    /// # Errors
    ///
    /// Propagates any [`chat`](Self::chat) failure.
    pub async fn send_message(&self, message: &str) -> Result<Value> {
        self.chat(message).await
    }

    /// Mirrors a board mutation as a natural-language task for the agent.
    ///
    /// # Errors
    ///
    /// Propagates any [`chat`](Self::chat) failure.
    pub async fn run_task(&self, task: &str) -> Result<Value> {
        self.chat(task).await
    }

    /// Fetches a fresh status snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the `session_status` tool invocation fails.
    pub async fn status(&self) -> Result<StatusSnapshot> {
        let response = self.invoke_tool("session_status", json!({})).await?;
        Ok(StatusSnapshot::from_response(&response))
    }

    /// Runs a gateway health check.
    ///
    /// # Errors
    ///
    /// Returns an error if the `health` tool invocation fails.
    pub async fn health(&self) -> Result<Value> {
        self.invoke_tool("health", json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = GatewayClient::new("http://gw.local:8080/", "token", "main");
        assert_eq!(client.url("/tools/invoke"), "http://gw.local:8080/tools/invoke");

        let client = GatewayClient::new("http://gw.local:8080", "token", "main");
        assert_eq!(client.url("/tools/invoke"), "http://gw.local:8080/tools/invoke");
    }

    #[test]
    fn debug_output_hides_token() {
        let client = GatewayClient::new("http://gw.local", "super-secret", "main");
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret"));
    }
}
