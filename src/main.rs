//! clawdeck - terminal dashboard cards for an OpenClaw agent gateway.
//!
//! This is the main binary that loads the configuration, opens the
//! persisted board, and launches the TUI application.

use clawdeck_config::Config;
use clawdeck_gateway::GatewayClient;
use clawdeck_store::BoardStore;
use clawdeck_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let config = Config::load()?;
    config.validate()?;

    let client = GatewayClient::new(
        &config.gateway.base_url,
        &config.gateway.api_token,
        &config.gateway.agent_id,
    );
    let store = BoardStore::for_key(&config.board.storage_key)?;

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(config, store, client);

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
