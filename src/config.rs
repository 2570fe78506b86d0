// src/config.rs

use std::env;
use std::fs;
use std::net::IpAddr;
use std::path::Path;

use anyhow::{Context, Result};

use crate::blockchain::models::{ChainShare, PositionSnapshot};

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub port: u16,
    pub bind_addr: IpAddr,

    // Identity reported by `initialize`
    pub server_name: String,
    pub server_version: String,

    /// Sample position served by the analytics tools
    pub position: PositionSnapshot,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            bind_addr: IpAddr::from([127, 0, 0, 1]),
            server_name: "ob1-copilot-toolkit".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            position: PositionSnapshot::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset keys keep their
    /// defaults.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let position = match var("POSITION_FILE") {
            Some(path) => load_position_file(&path)?,
            None => position_from_vars(&var, defaults.position)?,
        };

        Ok(Config {
            port: match var("PORT") {
                Some(v) => v.parse().context("PORT must be a valid number")?,
                None => defaults.port,
            },
            bind_addr: match var("BIND_ADDR") {
                Some(v) => v.parse().context("BIND_ADDR must be a valid IP address")?,
                None => defaults.bind_addr,
            },
            server_name: var("SERVER_NAME").unwrap_or(defaults.server_name),
            server_version: var("SERVER_VERSION").unwrap_or(defaults.server_version),
            position,
        })
    }
}

/// Reads a JSON-encoded [`PositionSnapshot`] from disk.
pub fn load_position_file(path: impl AsRef<Path>) -> Result<PositionSnapshot> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read POSITION_FILE {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid position JSON in {}", path.display()))
}

fn position_from_vars<F>(var: &F, mut position: PositionSnapshot) -> Result<PositionSnapshot>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(wallet) = var("POSITION_WALLET") {
        position.wallet = wallet;
    }
    if let Some(v) = var("POSITION_TOTAL_POINTS") {
        position.total_points = v
            .parse()
            .context("POSITION_TOTAL_POINTS must be a whole number")?;
    }
    if let Some(v) = var("POSITION_ECOSYSTEM_SHARE") {
        position.ecosystem_share = v
            .parse()
            .context("POSITION_ECOSYSTEM_SHARE must be a number")?;
    }
    if let Some(v) = var("POSITION_CHAIN_DISTRIBUTION") {
        position.chain_distribution = serde_json::from_str::<Vec<ChainShare>>(&v)
            .context("POSITION_CHAIN_DISTRIBUTION must be a JSON array of {chain, percent}")?;
    }
    if let Some(v) = var("POSITION_COMPETITIVE_ADVANTAGE") {
        position.competitive_advantage = v
            .parse()
            .context("POSITION_COMPETITIVE_ADVANTAGE must be a number")?;
    }
    if let Some(label) = var("POSITION_LABEL") {
        position.position = label;
    }
    Ok(position)
}
