// src/blockchain/models.rs
use serde::{Deserialize, Serialize};

/// Share of the position's points earned on one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainShare {
    pub chain: String,
    pub percent: f64,
}

impl ChainShare {
    pub fn new(chain: impl Into<String>, percent: f64) -> Self {
        Self {
            chain: chain.into(),
            percent,
        }
    }
}

/// SuperStacks position the analytics tools report on.
///
/// Loaded once with the configuration and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    pub wallet: String,
    pub total_points: u64,
    /// Percentage of all points in the ecosystem.
    pub ecosystem_share: f64,
    /// Ordered as it should be reported.
    pub chain_distribution: Vec<ChainShare>,
    /// Multiple over the median participant.
    pub competitive_advantage: f64,
    pub position: String,
}

impl Default for PositionSnapshot {
    fn default() -> Self {
        Self {
            wallet: "0x21cC30462B8392Aa250453704019800092a16165".to_string(),
            total_points: 242_666_666,
            ecosystem_share: 9.06,
            chain_distribution: vec![
                ChainShare::new("Unichain", 80.8),
                ChainShare::new("Optimism", 13.7),
                ChainShare::new("Ink", 3.9),
                ChainShare::new("Soneium", 1.1),
                ChainShare::new("Base", 0.4),
                ChainShare::new("Worldchain", 0.03),
            ],
            competitive_advantage: 6.4,
            position: "TOP 5 PARTICIPANT".to_string(),
        }
    }
}

impl PositionSnapshot {
    /// Total points in millions, e.g. `242.67`.
    pub fn points_in_millions(&self) -> f64 {
        self.total_points as f64 / 1_000_000.0
    }
}
