// src/lib.rs

use std::sync::Arc;

pub mod api;
pub mod blockchain;
pub mod config;
pub mod mcp;
pub mod services;
pub mod tools;
pub mod utils;

use blockchain::{ChainDataSource, MockChainClient};
use services::ToolContext;
use tools::{Dispatcher, ToolRegistry};

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// Resolves and runs tool calls against the read-only registry
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// State backed by the mock chain data source.
    pub fn new(config: config::Config) -> Self {
        Self::with_chain_data(config, Arc::new(MockChainClient::new()))
    }

    pub fn with_chain_data(config: config::Config, chain_data: Arc<dyn ChainDataSource>) -> Self {
        let context = ToolContext::new(config.position.clone(), chain_data);
        let dispatcher = Dispatcher::new(Arc::new(ToolRegistry::new()), context);
        Self { config, dispatcher }
    }
}
