use crate::booter::Booter;
use crate::server::build_router;
use crate::server::types::AppState;
use crate::utils::constants::ANTHROPIC_MESSAGES_URL;
use crate::utils::get_env::get_env_var;
use reqwest::Client;
use std::sync::Arc;

pub mod booter;
pub mod core;
pub mod server;
pub mod utils;

// Initialize app state from environment variables. A missing API key is
// tolerated at startup and rejected per request.
fn init_app_state() -> AppState {
    let api_key = get_env_var("ANTHROPIC_API_KEY").unwrap_or_default();

    AppState {
        http_client: Client::new(),
        api_url: ANTHROPIC_MESSAGES_URL.to_string(),
        api_key,
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let state = Arc::new(init_app_state());
    if state.api_key.is_empty() {
        tracing::warn!("ANTHROPIC_API_KEY not set. Set it to enable live analysis.");
    }

    let router = build_router(state);

    let booter = Booter::new(Some(3001)).await?;
    tracing::info!("Win brand assistant running on http://localhost:{}", booter.port);
    tracing::info!("API endpoint: http://localhost:{}/api/analyze", booter.port);
    booter.start(router).await?;

    Ok(())
}
