//! Turns one [`InvocationRequest`] into exactly one [`InvocationResult`].
//!
//! Lookup and validation failures are rejected here before any handler runs.
//! Handler errors and panics are caught at this boundary, so nothing a tool
//! does can take down the request loop.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, warn};

use crate::{
    mcp::protocol::{ContentBlock, InvocationRequest, InvocationResult},
    services::{chain_query, code_review, contract, dashboard, position, ToolContext},
};

use super::{args::ToolCall, error::ToolError, registry::ToolRegistry};

#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    context: Arc<ToolContext>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>, context: ToolContext) -> Self {
        Self {
            registry,
            context: Arc::new(context),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub async fn dispatch(&self, request: &InvocationRequest) -> InvocationResult {
        debug!(tool = %request.name, "tool call received");
        match self.try_dispatch(request).await {
            Ok(content) => {
                debug!(tool = %request.name, "tool call completed");
                InvocationResult::success(content)
            }
            Err(err) => {
                warn!(tool = %request.name, error = %err, "tool call failed");
                InvocationResult::error(err)
            }
        }
    }

    async fn try_dispatch(&self, request: &InvocationRequest) -> Result<Vec<ContentBlock>, ToolError> {
        let definition = self
            .registry
            .get(&request.name)
            .ok_or_else(|| ToolError::UnknownTool(request.name.clone()))?;
        let call = ToolCall::parse(definition.tool, &definition.input_schema, &request.arguments)?;
        debug!(tool = definition.name, "arguments validated");
        self.execute(call).await
    }

    async fn execute(&self, call: ToolCall) -> Result<Vec<ContentBlock>, ToolError> {
        let ctx = self.context.as_ref();
        let handler = async move {
            match &call {
                ToolCall::AnalyzePosition(args) => position::analyze_position(ctx, args),
                ToolCall::BlockchainDataQuery(args) => chain_query::query_chain(ctx, args).await,
                ToolCall::CodeAnalysis(args) => code_review::analyze_code(ctx, args),
                ToolCall::GenerateDashboard(args) => dashboard::generate_dashboard(ctx, args),
                ToolCall::SmartContractHelper(args) => contract::smart_contract_helper(ctx, args),
            }
        };

        match AssertUnwindSafe(handler).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => Err(ToolError::HandlerFault(panic_message(&*panic))),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("tool panicked: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("tool panicked: {}", s)
    } else {
        "tool panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::{ChainDataSource, PositionSnapshot};
    use crate::tools::args::Chain;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingChainData {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChainDataSource for CountingChainData {
        async fn query(&self, _: Chain, _: &str, _: Option<&str>) -> anyhow::Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!({ "ok": true }))
        }
    }

    struct FailingChainData;

    #[async_trait]
    impl ChainDataSource for FailingChainData {
        async fn query(&self, _: Chain, _: &str, _: Option<&str>) -> anyhow::Result<Value> {
            anyhow::bail!("rpc endpoint unreachable")
        }
    }

    struct PanickingChainData;

    #[async_trait]
    impl ChainDataSource for PanickingChainData {
        async fn query(&self, _: Chain, _: &str, _: Option<&str>) -> anyhow::Result<Value> {
            panic!("backend exploded")
        }
    }

    fn dispatcher_with(chain_data: Arc<dyn ChainDataSource>) -> Dispatcher {
        Dispatcher::new(
            Arc::new(ToolRegistry::new()),
            ToolContext::new(PositionSnapshot::default(), chain_data),
        )
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(ToolRegistry::new()), ToolContext::default())
    }

    async fn call(d: &Dispatcher, name: &str, arguments: Value) -> InvocationResult {
        d.dispatch(&InvocationRequest::new(name, arguments)).await
    }

    #[tokio::test]
    async fn test_unknown_tool_is_rejected() {
        let result = call(&dispatcher(), "solana_bridge", json!({})).await;
        assert!(result.is_error);
        assert_eq!(result.content.len(), 1);
        assert!(result.text().contains("solana_bridge"));
    }

    #[tokio::test]
    async fn test_missing_required_field_never_reaches_handler() {
        let source = Arc::new(CountingChainData::default());
        let d = dispatcher_with(source.clone());

        let result = call(&d, "blockchain_data_query", json!({ "method": "stats" })).await;
        assert!(result.is_error);
        assert!(result.text().contains("'chain'"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);

        let result = call(&d, "blockchain_data_query", json!({ "chain": "base", "method": "stats" })).await;
        assert!(!result.is_error);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_enum_violation_lists_domain() {
        let result = call(
            &dispatcher(),
            "blockchain_data_query",
            json!({ "chain": "solana", "method": "stats" }),
        )
        .await;
        assert!(result.is_error);
        let text = result.text();
        assert!(text.contains("solana"));
        assert!(text.contains("ethereum, unichain, optimism, base, arbitrum"));
    }

    #[tokio::test]
    async fn test_extra_fields_are_ignored() {
        let result = call(
            &dispatcher(),
            "analyze_position",
            json!({ "analysis_type": "risk", "verbose": true }),
        )
        .await;
        assert!(!result.is_error);
        assert!(result.text().contains("RISK ASSESSMENT"));
    }

    #[tokio::test]
    async fn test_default_matches_explicit_current() {
        let d = dispatcher();
        let defaulted = call(&d, "analyze_position", json!({})).await;
        let explicit = call(&d, "analyze_position", json!({ "analysis_type": "current" })).await;
        assert_eq!(defaulted, explicit);
        assert_eq!(call(&d, "analyze_position", Value::Null).await, explicit);
    }

    #[tokio::test]
    async fn test_identical_calls_are_identical() {
        let d = dispatcher();
        let args = json!({ "analysis_type": "current" });
        let first = call(&d, "analyze_position", args.clone()).await;
        let second = call(&d, "analyze_position", args).await;
        assert_eq!(first.text(), second.text());
    }

    #[tokio::test]
    async fn test_handler_error_becomes_error_result() {
        let d = dispatcher_with(Arc::new(FailingChainData));
        let result = call(&d, "blockchain_data_query", json!({ "chain": "optimism", "method": "tps" })).await;
        assert!(result.is_error);
        assert!(result.text().contains("rpc endpoint unreachable"));
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_error_result() {
        let d = dispatcher_with(Arc::new(PanickingChainData));
        let result = call(&d, "blockchain_data_query", json!({ "chain": "base", "method": "tps" })).await;
        assert!(result.is_error);
        assert!(result.text().contains("backend exploded"));

        // the dispatcher keeps serving afterwards
        let result = call(&d, "code_analysis", json!({ "code": "x", "language": "python" })).await;
        assert!(!result.is_error);
        assert!(result.text().contains("BEST PRACTICES"));
    }

    #[tokio::test]
    async fn test_code_analysis_focus_branches() {
        let d = dispatcher();
        let security = call(
            &d,
            "code_analysis",
            json!({ "code": "x", "language": "solidity", "analysis_focus": "security" }),
        )
        .await;
        let gas = call(
            &d,
            "code_analysis",
            json!({ "code": "x", "language": "solidity", "analysis_focus": "gas_efficiency" }),
        )
        .await;
        assert!(!security.is_error && !gas.is_error);
        assert!(security.text().contains("SECURITY ANALYSIS"));
        assert_ne!(security.text(), gas.text());
    }

    #[tokio::test]
    async fn test_smart_contract_generate_vs_analyze() {
        let d = dispatcher();
        let generated = call(
            &d,
            "smart_contract_helper",
            json!({ "contract_type": "erc20", "action": "generate" }),
        )
        .await;
        let analyzed = call(
            &d,
            "smart_contract_helper",
            json!({ "contract_type": "erc20", "action": "analyze" }),
        )
        .await;
        assert!(!generated.is_error && !analyzed.is_error);
        assert!(generated.text().contains("pragma solidity"));
        assert!(analyzed.text().contains("Security Checklist"));
        assert_ne!(generated.text(), analyzed.text());
    }

    #[tokio::test]
    async fn test_wrong_type_is_invalid_argument() {
        let result = call(
            &dispatcher(),
            "generate_dashboard",
            json!({ "dashboard_type": "defi", "framework": "react", "features": "charts" }),
        )
        .await;
        assert!(result.is_error);
        assert!(result.text().contains("'features'"));
    }
}
