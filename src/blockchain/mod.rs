// src/blockchain/mod.rs

pub mod client;
pub use client::{ChainDataSource, MockChainClient};

pub mod models;
pub use models::{ChainShare, PositionSnapshot};
