//! Asynchronous remote actions and their completion events.
//!
//! Every remote call runs on its own task and reports back through an
//! unbounded channel drained by the run loop, so the UI thread never
//! blocks. Spawned tasks are tracked and aborted on teardown so a
//! completion can never land on a widget that no longer exists.

use std::sync::Arc;

use clawdeck_gateway::{GatewayClient, StatusSnapshot};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

/// Completion events delivered back to the run loop.
#[derive(Debug)]
pub enum CardEvent {
    /// A prompt send finished. `Ok` carries the message that was sent.
    SendFinished(Result<String, String>),
    /// A best-effort board notification failed. Successes are silent.
    NotifyFailed(String),
    /// A status refresh finished.
    StatusRefreshed(Result<StatusSnapshot, String>),
    /// A health check finished.
    HealthChecked(Result<(), String>),
}

/// Dispatcher for the gateway's remote actions.
///
/// Calls are fire-and-forget from the caller's point of view; outcomes
/// arrive as [`CardEvent`]s. Nothing is retried and there is no
/// cross-call ordering guarantee.
#[derive(Debug)]
pub struct Remote {
    client: Arc<GatewayClient>,
    tx: mpsc::UnboundedSender<CardEvent>,
    handles: Vec<JoinHandle<()>>,
    /// Requests recorded for assertions; tests have no live gateway.
    #[cfg(test)]
    pub(crate) sent: Vec<String>,
}

impl Remote {
    /// Creates a dispatcher and the receiving end of its event channel.
    #[must_use]
    pub fn new(client: GatewayClient) -> (Self, mpsc::UnboundedReceiver<CardEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                client: Arc::new(client),
                tx,
                handles: Vec::new(),
                #[cfg(test)]
                sent: Vec::new(),
            },
            rx,
        )
    }

    fn track(&mut self, handle: JoinHandle<()>) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    /// Number of remote calls still in flight.
    #[must_use]
    pub fn inflight(&mut self) -> usize {
        self.handles.retain(|h| !h.is_finished());
        self.handles.len()
    }

    /// Sends a prompt message.
    pub fn send_message(&mut self, message: String) {
        #[cfg(test)]
        self.sent.push(message.clone());

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = match client.send_message(&message).await {
                Ok(_) => Ok(message),
                Err(err) => Err(err.to_string()),
            };
            let _ = tx.send(CardEvent::SendFinished(outcome));
        });
        self.track(handle);
    }

    /// Mirrors a board mutation as a run-task notification.
    ///
    /// Best-effort: only failures produce an event.
    pub fn notify(&mut self, note: String) {
        #[cfg(test)]
        self.sent.push(note.clone());

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            if let Err(err) = client.run_task(&note).await {
                warn!(%err, "board notification failed");
                let _ = tx.send(CardEvent::NotifyFailed(err.to_string()));
            }
        });
        self.track(handle);
    }

    /// Fetches a fresh status snapshot.
    pub fn refresh_status(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = client.status().await.map_err(|err| err.to_string());
            let _ = tx.send(CardEvent::StatusRefreshed(outcome));
        });
        self.track(handle);
    }

    /// Runs a gateway health check.
    pub fn health_check(&mut self) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = client
                .health()
                .await
                .map(|_| ())
                .map_err(|err| err.to_string());
            let _ = tx.send(CardEvent::HealthChecked(outcome));
        });
        self.track(handle);
    }

    /// Aborts every in-flight call.
    pub fn shutdown(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for Remote {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_remote() -> (Remote, mpsc::UnboundedReceiver<CardEvent>) {
        // Unroutable base URL; calls fail fast and report through the channel
        Remote::new(GatewayClient::new("http://127.0.0.1:9", "token", "main"))
    }

    #[tokio::test]
    async fn send_failure_reports_completion() {
        let (mut remote, mut rx) = test_remote();

        remote.send_message("hello".to_string());

        let event = rx.recv().await.expect("completion event");
        match event {
            CardEvent::SendFinished(Err(_)) => {}
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn notify_failure_reports_completion() {
        let (mut remote, mut rx) = test_remote();

        remote.notify("Created task \"x\" in To Do".to_string());

        let event = rx.recv().await.expect("completion event");
        assert!(matches!(event, CardEvent::NotifyFailed(_)));
    }

    #[tokio::test]
    async fn shutdown_aborts_inflight_calls() {
        let (mut remote, _rx) = test_remote();

        remote.refresh_status();
        remote.shutdown();

        assert_eq!(remote.inflight(), 0);
    }
}
