//! # MCP Handler Module
//!
//! Routes JSON-RPC requests to the protocol methods the server implements.
//!
//! ## Supported Methods
//! - `initialize` - server identity and capabilities
//! - `ping` - liveness check
//! - `tools/list` - the tool catalog
//! - `tools/call` - run a tool through the dispatcher
//!
//! A request whose method is a tool name (e.g. `analyze_position`) is
//! rewritten into `tools/call` with its params as the arguments.

use serde_json::{json, Value};
use tracing::{error, info};

use crate::{
    mcp::protocol::{error_codes, InvocationRequest, Request, Response, PROTOCOL_VERSION},
    utils, AppState,
};

/// This is the main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    info!("Handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req, &state),
        "ping" => Response::success(req.id, json!({})),
        "tools/list" => handle_tools_list(&req, &state),
        "tools/call" => handle_tool_call(req, &state).await,
        method if state.dispatcher.registry().contains(method) => {
            let wrapped = Request {
                jsonrpc: req.jsonrpc.clone(),
                id: req.id.clone(),
                method: "tools/call".to_string(),
                params: Some(json!({
                    "name": method,
                    "arguments": req.params.clone().unwrap_or_else(|| json!({}))
                })),
            };
            handle_tool_call(wrapped, &state).await
        }
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

/// Handles a 'tools/call' request by handing it to the dispatcher.
async fn handle_tool_call(req: Request, state: &AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) if p.is_object() => p,
        _ => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let name = match utils::get_required_arg::<String>(params, "name", &req.id) {
        Ok(name) => name,
        Err(resp) => return resp,
    };
    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

    let result = state
        .dispatcher
        .dispatch(&InvocationRequest::new(name, arguments))
        .await;

    match serde_json::to_value(&result) {
        Ok(value) => Response::success(req.id, value),
        Err(e) => {
            error!("Failed to serialize tool result: {}", e);
            Response::error(req.id, error_codes::INTERNAL_ERROR, e.to_string())
        }
    }
}

fn handle_initialize(req: &Request, state: &AppState) -> Response {
    let server_info = json!({
        "name": state.config.server_name,
        "version": state.config.server_version
    });
    let capabilities = json!({ "tools": { "listChanged": false } });
    let instructions =
        "OB-1 + Copilot toolkit: position analytics, multi-chain data queries, code analysis, and dashboard and smart contract generation.";

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}

/// Handles the 'tools/list' request by returning the registry's catalog.
fn handle_tools_list(req: &Request, state: &AppState) -> Response {
    match serde_json::to_value(state.dispatcher.registry().list()) {
        Ok(tools) => Response::success(req.id.clone(), json!({ "tools": tools })),
        Err(e) => {
            error!("Failed to serialize tool catalog: {}", e);
            Response::error(req.id.clone(), error_codes::INTERNAL_ERROR, e.to_string())
        }
    }
}
