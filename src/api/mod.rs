//! # API Module
//!
//! HTTP surface of the server, for hosts that cannot spawn a stdio process.
//!
//! ## Available Endpoints
//! - `GET /api/health` - liveness check
//! - `GET /api/tools` - the tool catalog, as `tools/list` returns it
//! - `POST /api/rpc` - JSON-RPC endpoint for MCP requests

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub mod health;
pub mod rpc;
pub mod tools;

pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/tools", get(tools::list_tools_handler))
        .route("/rpc", post(rpc::rpc_handler));

    Router::new()
        .nest("/api", api_router)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
