//! Typed argument sets for each tool.
//!
//! Arguments arrive as loose JSON. [`ToolCall::parse`] runs them through the
//! tool's [`InputSchema`] (presence, type, enum membership, defaults) and then
//! deserializes the result into the concrete struct for that tool, so a
//! handler only ever sees values from its closed variant sets.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ToolError;
use super::registry::ToolName;
use super::schema::InputSchema;

closed_enum! {
    /// Report flavour for `analyze_position`.
    pub enum AnalysisType {
        Current => "current",
        Optimization => "optimization",
        Risk => "risk",
        Projection => "projection",
    }
}

closed_enum! {
    /// Chains `blockchain_data_query` knows about.
    pub enum Chain {
        Ethereum => "ethereum",
        Unichain => "unichain",
        Optimism => "optimism",
        Base => "base",
        Arbitrum => "arbitrum",
    }
}

closed_enum! {
    pub enum Language {
        Solidity => "solidity",
        Javascript => "javascript",
        Typescript => "typescript",
        Python => "python",
    }
}

closed_enum! {
    pub enum AnalysisFocus {
        Security => "security",
        Optimization => "optimization",
        BestPractices => "best_practices",
        GasEfficiency => "gas_efficiency",
    }
}

closed_enum! {
    pub enum DashboardType {
        Superstacks => "superstacks",
        Defi => "defi",
        Nft => "nft",
        Portfolio => "portfolio",
    }
}

closed_enum! {
    pub enum Framework {
        React => "react",
        Vue => "vue",
        Vanilla => "vanilla",
    }
}

closed_enum! {
    pub enum ContractType {
        Erc20 => "erc20",
        Erc721 => "erc721",
        Erc1155 => "erc1155",
        Defi => "defi",
        Dao => "dao",
        Custom => "custom",
    }
}

closed_enum! {
    pub enum ContractAction {
        Generate => "generate",
        Analyze => "analyze",
        Optimize => "optimize",
        Audit => "audit",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalyzePositionArgs {
    pub analysis_type: AnalysisType,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlockchainQueryArgs {
    pub chain: Chain,
    pub method: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeAnalysisArgs {
    pub code: String,
    pub language: Language,
    pub analysis_focus: AnalysisFocus,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardArgs {
    pub dashboard_type: DashboardType,
    pub framework: Framework,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContractHelperArgs {
    pub contract_type: ContractType,
    pub action: ContractAction,
    pub requirements: String,
}

/// A validated invocation, one variant per tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    AnalyzePosition(AnalyzePositionArgs),
    BlockchainDataQuery(BlockchainQueryArgs),
    CodeAnalysis(CodeAnalysisArgs),
    GenerateDashboard(DashboardArgs),
    SmartContractHelper(ContractHelperArgs),
}

impl ToolCall {
    /// Validates raw `arguments` for `tool` and builds its typed call.
    ///
    /// `null` is treated as an empty argument object.
    pub fn parse(tool: ToolName, schema: &InputSchema, arguments: &Value) -> Result<Self, ToolError> {
        let raw = match arguments {
            Value::Null => Map::new(),
            Value::Object(map) => map.clone(),
            _ => return Err(ToolError::wrong_type("arguments", "an object")),
        };
        let validated = Value::Object(schema.validate(&raw)?);

        Ok(match tool {
            ToolName::AnalyzePosition => ToolCall::AnalyzePosition(from_validated(validated)?),
            ToolName::BlockchainDataQuery => {
                ToolCall::BlockchainDataQuery(from_validated(validated)?)
            }
            ToolName::CodeAnalysis => ToolCall::CodeAnalysis(from_validated(validated)?),
            ToolName::GenerateDashboard => ToolCall::GenerateDashboard(from_validated(validated)?),
            ToolName::SmartContractHelper => {
                ToolCall::SmartContractHelper(from_validated(validated)?)
            }
        })
    }
}

fn from_validated<T: DeserializeOwned>(value: Value) -> Result<T, ToolError> {
    serde_json::from_value(value).map_err(|e| ToolError::InvalidArgument {
        field: "arguments".to_string(),
        reason: e.to_string(),
    })
}
