//! # Services
//!
//! Tool bodies. Each service takes the shared [`ToolContext`] and its typed
//! arguments and returns the content blocks for the response.

use std::sync::Arc;

use crate::blockchain::{ChainDataSource, MockChainClient, PositionSnapshot};

pub mod chain_query;
pub mod code_review;
pub mod contract;
pub mod dashboard;
pub mod position;

/// Immutable inputs shared by every tool call.
#[derive(Clone)]
pub struct ToolContext {
    pub position: PositionSnapshot,
    pub chain_data: Arc<dyn ChainDataSource>,
}

impl ToolContext {
    pub fn new(position: PositionSnapshot, chain_data: Arc<dyn ChainDataSource>) -> Self {
        Self {
            position,
            chain_data,
        }
    }
}

impl Default for ToolContext {
    fn default() -> Self {
        Self::new(PositionSnapshot::default(), Arc::new(MockChainClient::new()))
    }
}
