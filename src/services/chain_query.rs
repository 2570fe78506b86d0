use tracing::error;

use crate::{
    mcp::protocol::ContentBlock,
    tools::{args::BlockchainQueryArgs, ToolError},
};

use super::ToolContext;

/// Asks the chain data source and wraps its answer verbatim.
pub async fn query_chain(
    ctx: &ToolContext,
    args: &BlockchainQueryArgs,
) -> Result<Vec<ContentBlock>, ToolError> {
    let data = ctx
        .chain_data
        .query(args.chain, &args.method, args.address.as_deref())
        .await
        .map_err(|e| {
            error!("Chain query on {} failed: {:#}", args.chain, e);
            ToolError::HandlerFault(format!("{} query failed: {}", args.chain, e))
        })?;
    let data = serde_json::to_string_pretty(&data)
        .map_err(|e| ToolError::HandlerFault(format!("Unprintable chain data: {}", e)))?;

    let address = args
        .address
        .as_deref()
        .filter(|a| !a.is_empty())
        .map(|a| format!("Address: {}\n", a))
        .unwrap_or_default();

    Ok(vec![ContentBlock::text(format!(
        "🔗 BLOCKCHAIN QUERY RESULTS\n\n\
         Chain: {}\n\
         Method: {}\n\
         {}\n\
         Data: {}\n\n\
         ⚡ Query executed successfully with OB-1 intelligence",
        args.chain.as_str().to_uppercase(),
        args.method,
        address,
        data
    ))])
}
