use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use bot_server::bot::Dialogue;
use bot_server::ekispert::{EkispertClient, EkispertConfig};
use bot_server::line::{LineClient, LineConfig};
use bot_server::planner::{Planner, PlannerConfig};
use bot_server::session::SessionStore;
use bot_server::web::{AppState, create_router};

/// Default listen port when PORT is unset or unparseable.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Credentials from environment
    let channel_access_token = env_or_warn("LINE_CHANNEL_ACCESS_TOKEN");
    let channel_secret = env_or_warn("LINE_CHANNEL_SECRET");
    let ekispert_api_key = env_or_warn("EKISPERT_API_KEY");

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // Create API clients
    let ekispert = EkispertClient::new(EkispertConfig::new(&ekispert_api_key))
        .expect("Failed to create Ekispert client");
    let line =
        LineClient::new(LineConfig::new(&channel_access_token)).expect("Failed to create LINE client");

    // Conversation driver over the live routing client
    let planner = Planner::new(ekispert, PlannerConfig::default());
    let dialogue = Dialogue::new(planner, SessionStore::new());

    // Build app state and router
    let state = AppState::new(dialogue, line, channel_secret);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("rail-fan route bot listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen port");
    axum::serve(listener, app).await.expect("Server error");
}

fn env_or_warn(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        eprintln!("Warning: {name} not set. API calls will fail.");
        String::new()
    })
}
