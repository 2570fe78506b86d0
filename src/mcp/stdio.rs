//! Newline-delimited JSON-RPC over a byte stream (stdin/stdout in production).
//!
//! Each line is handled to completion and its response written before the
//! next line is read.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use crate::{
    mcp::{
        handler::handle_mcp_request,
        protocol::{error_codes, Request, Response},
    },
    AppState,
};

pub async fn serve<R, W>(mut reader: R, mut writer: W, state: AppState)
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => {
                info!("EOF received, shutting down MCP server");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                break;
            }
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                debug!("Received: {}", line);
                handle_line(line, &state).await
            }
            Err(utf8_error) => {
                error!("Received a line that is not valid UTF-8: {}", utf8_error);
                Some(parse_error(format!("Parse error: {}", utf8_error)))
            }
        };

        let Some(response) = response else {
            continue;
        };

        match serde_json::to_string(&response) {
            Ok(response_json) => {
                debug!("Sending: {}", response_json);
                let written = async {
                    writer.write_all(response_json.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                    writer.flush().await
                }
                .await;
                if let Err(e) = written {
                    error!("Failed to write response: {}", e);
                    break;
                }
            }
            Err(e) => error!("Failed to serialize response: {}", e),
        }
    }

    info!("MCP server shutting down");
}

async fn handle_line(line: &str, state: &AppState) -> Option<Response> {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle_mcp_request(request, state.clone()).await,
        Err(e) => {
            error!("JSON parse error: {}", e);
            Some(parse_error(format!("Parse error: {}", e)))
        }
    }
}

fn parse_error(message: String) -> Response {
    Response::error(serde_json::Value::Null, error_codes::PARSE_ERROR, message)
}
