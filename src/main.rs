// src/main.rs

use std::env;
use std::net::SocketAddr;

use ob1_mcp_server::{api, config::Config, mcp::stdio, AppState};
use tokio::io;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// --- HTTP Server Logic ---
async fn run_http_server(state: AppState) -> anyhow::Result<()> {
    let addr = SocketAddr::new(state.config.bind_addr, state.config.port);
    let app = api::create_router(state);

    info!("🚀 HTTP Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}

// --- MCP Server Logic ---
async fn run_mcp_server(state: AppState) {
    info!(
        "🚀 Starting MCP server on stdin/stdout with {} tools...",
        state.dispatcher.registry().len()
    );
    stdio::serve(io::BufReader::new(io::stdin()), io::stdout(), state).await;
}

#[tokio::main]
async fn main() {
    // Initialize tracing; stdout belongs to the protocol
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ob1_mcp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(config);

    // Check if running in MCP mode (stdin/stdout) or HTTP server mode
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--mcp") || env::var("MCP_MODE").is_ok() {
        run_mcp_server(app_state).await;
    } else if let Err(e) = run_http_server(app_state).await {
        error!("❌ HTTP server failed: {:#}", e);
        std::process::exit(1);
    }
}
