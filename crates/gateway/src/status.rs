//! Host-observed status values.
//!
//! The cards never poll; they read whatever snapshot is current at
//! render time. A snapshot is produced from the gateway's
//! `session_status` tool response, which wraps its payload in an
//! optional `result` envelope and is loose about key names across
//! gateway versions, so parsing picks the first present key from a
//! list of known synonyms.

use serde_json::Value;

/// A point-in-time view of the gateway state.
///
/// # Examples
///
/// ```
/// use clawdeck_gateway::StatusSnapshot;
///
/// let offline = StatusSnapshot::offline();
/// assert_eq!(offline.state_label(), "offline");
/// assert!(offline.last_response.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    /// Whether the last status fetch succeeded.
    pub online: bool,
    /// Number of active gateway sessions.
    pub active_sessions: u64,
    /// Total tokens consumed, if the gateway reports usage.
    pub total_tokens: Option<u64>,
    /// Estimated cost, if the gateway reports usage.
    pub cost: Option<f64>,
    /// Gateway uptime in seconds, if reported.
    pub uptime_secs: Option<u64>,
    /// The gateway's last response text, if reported.
    pub last_response: Option<String>,
}

/// Unwraps the optional `result` envelope around a status payload.
fn data_root(value: &Value) -> &Value {
    match value.get("result") {
        Some(inner) if inner.is_object() => inner,
        _ => value,
    }
}

/// Returns the first present value among the given keys.
fn pick<'a>(data: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| {
        let val = data.get(key)?;
        (!val.is_null()).then_some(val)
    })
}

fn pick_u64(data: &Value, keys: &[&str]) -> Option<u64> {
    pick(data, keys).and_then(Value::as_u64)
}

impl StatusSnapshot {
    /// The snapshot shown before any fetch has succeeded.
    #[must_use]
    pub fn offline() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a `session_status` tool response.
    ///
    /// Missing or unrecognized fields fall back to their defaults; the
    /// snapshot is marked online because the response was obtained.
    ///
    /// # Examples
    ///
    /// ```
    /// use clawdeck_gateway::StatusSnapshot;
    /// use serde_json::json;
    ///
    /// let snapshot = StatusSnapshot::from_response(&json!({
    ///     "result": { "activeSessions": 2, "uptimeSec": 90 }
    /// }));
    /// assert!(snapshot.online);
    /// assert_eq!(snapshot.active_sessions, 2);
    /// assert_eq!(snapshot.uptime_secs, Some(90));
    /// ```
    #[must_use]
    pub fn from_response(value: &Value) -> Self {
        let root = data_root(value);
        let usage = root.get("usage").filter(|u| u.is_object());

        Self {
            online: true,
            active_sessions: pick_u64(root, &["activeSessions", "sessions", "sessionCount"])
                .unwrap_or(0),
            total_tokens: usage.and_then(|u| {
                pick_u64(u, &["totalTokens", "tokens", "inputTokens", "outputTokens"])
            }),
            cost: usage
                .and_then(|u| pick(u, &["cost", "totalCost", "estimatedCost"]))
                .and_then(Value::as_f64),
            uptime_secs: pick_u64(root, &["uptimeSec", "uptimeSeconds", "uptime"]),
            last_response: pick(root, &["lastResponse", "last_response"])
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Returns the display label for the online/offline state.
    #[must_use]
    pub const fn state_label(&self) -> &'static str {
        if self.online { "online" } else { "offline" }
    }
}
