// src/tools/registry.rs

use serde::Serialize;
use serde_json::json;

use super::args::{
    AnalysisFocus, AnalysisType, Chain, ContractAction, ContractType, DashboardType, Framework,
    Language,
};
use super::schema::{InputSchema, ParamSpec, ParamType};

closed_enum! {
    /// Every tool the server exposes, in catalog order.
    pub enum ToolName {
        AnalyzePosition => "analyze_position",
        BlockchainDataQuery => "blockchain_data_query",
        CodeAnalysis => "code_analysis",
        GenerateDashboard => "generate_dashboard",
        SmartContractHelper => "smart_contract_helper",
    }
}

impl ToolName {
    pub fn description(self) -> &'static str {
        match self {
            ToolName::AnalyzePosition => {
                "Analyze the SuperStacks position and provide strategic insights"
            }
            ToolName::BlockchainDataQuery => "Query blockchain data across multiple chains",
            ToolName::CodeAnalysis => "Enhance code with blockchain intelligence",
            ToolName::GenerateDashboard => "Generate blockchain dashboard components",
            ToolName::SmartContractHelper => "Generate and analyze smart contracts",
        }
    }

    pub fn input_schema(self) -> InputSchema {
        match self {
            ToolName::AnalyzePosition => InputSchema::new(vec![ParamSpec::optional(
                "analysis_type",
                ParamType::String,
                "Type of analysis to perform",
            )
            .one_of(AnalysisType::NAMES)
            .with_default(json!(AnalysisType::Current))]),
            ToolName::BlockchainDataQuery => InputSchema::new(vec![
                ParamSpec::required("chain", ParamType::String, "Target blockchain")
                    .one_of(Chain::NAMES),
                ParamSpec::required("method", ParamType::String, "RPC method or query type"),
                ParamSpec::optional(
                    "address",
                    ParamType::String,
                    "Contract or wallet address (optional)",
                ),
            ]),
            ToolName::CodeAnalysis => InputSchema::new(vec![
                ParamSpec::required("code", ParamType::String, "Code to analyze"),
                ParamSpec::required("language", ParamType::String, "Programming language")
                    .one_of(Language::NAMES),
                ParamSpec::optional(
                    "analysis_focus",
                    ParamType::String,
                    "Focus area for analysis",
                )
                .one_of(AnalysisFocus::NAMES)
                .with_default(json!(AnalysisFocus::BestPractices)),
            ]),
            ToolName::GenerateDashboard => InputSchema::new(vec![
                ParamSpec::required(
                    "dashboard_type",
                    ParamType::String,
                    "Type of dashboard to generate",
                )
                .one_of(DashboardType::NAMES),
                ParamSpec::required("framework", ParamType::String, "Frontend framework")
                    .one_of(Framework::NAMES),
                ParamSpec::optional(
                    "features",
                    ParamType::StringArray,
                    "Specific features to include",
                )
                .with_default(json!([])),
            ]),
            ToolName::SmartContractHelper => InputSchema::new(vec![
                ParamSpec::required(
                    "contract_type",
                    ParamType::String,
                    "Type of contract to work with",
                )
                .one_of(ContractType::NAMES),
                ParamSpec::required("action", ParamType::String, "Action to perform")
                    .one_of(ContractAction::NAMES),
                ParamSpec::optional(
                    "requirements",
                    ParamType::String,
                    "Specific requirements or existing code",
                )
                .with_default(json!("")),
            ]),
        }
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            tool: self,
            name: self.as_str(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}

/// A tool as advertised by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    #[serde(skip)]
    pub tool: ToolName,
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: InputSchema,
}

/// Read-only catalog of tool definitions, built once at startup.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: ToolName::ALL.iter().map(|t| t.definition()).collect(),
        }
    }

    /// All tools in declaration order.
    pub fn list(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_tool_listed_once_in_order() {
        let registry = ToolRegistry::new();
        let names: Vec<&str> = registry.list().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "analyze_position",
                "blockchain_data_query",
                "code_analysis",
                "generate_dashboard",
                "smart_contract_helper",
            ]
        );
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), registry.len());
    }

    #[test]
    fn test_required_fields_match_catalog() {
        let registry = ToolRegistry::new();
        let required = |name: &str| registry.get(name).unwrap().input_schema.required_fields();
        assert!(required("analyze_position").is_empty());
        assert_eq!(required("blockchain_data_query"), vec!["chain", "method"]);
        assert_eq!(required("code_analysis"), vec!["code", "language"]);
        assert_eq!(
            required("generate_dashboard"),
            vec!["dashboard_type", "framework"]
        );
        assert_eq!(
            required("smart_contract_helper"),
            vec!["contract_type", "action"]
        );
    }

    #[test]
    fn test_enum_domains() {
        let schema = ToolName::CodeAnalysis.input_schema();
        assert_eq!(
            schema.param("language").unwrap().allowed.unwrap(),
            &["solidity", "javascript", "typescript", "python"]
        );
        assert_eq!(
            schema.param("analysis_focus").unwrap().default,
            Some(json!("best_practices"))
        );
    }

    #[test]
    fn test_definition_serializes_with_input_schema() {
        let value = serde_json::to_value(ToolName::BlockchainDataQuery.definition()).unwrap();
        assert_eq!(value["name"], "blockchain_data_query");
        assert!(value.get("tool").is_none());
        assert_eq!(value["inputSchema"]["required"], json!(["chain", "method"]));
        assert_eq!(
            value["inputSchema"]["properties"]["chain"]["enum"],
            json!(["ethereum", "unichain", "optimism", "base", "arbitrum"])
        );
    }

    #[test]
    fn test_unknown_name_not_found() {
        let registry = ToolRegistry::new();
        assert!(registry.get("analyze_superstacks_position").is_none());
        assert!(!registry.contains("solana_query"));
    }
}
