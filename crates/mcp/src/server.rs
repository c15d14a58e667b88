// MCP server: newline-delimited JSON-RPC over stdio

use crate::protocol::{
    negotiate_protocol_version, CallToolParams, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo,
    ToolsCapability,
};
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use bytes::BytesMut;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};

const INSTRUCTIONS: &str = "Tools for exploring OpenML: datasets, tasks, flows, runs, \
    evaluations, setups and studies. List tools take slash-delimited filters such as \
    'limit/10/offset/0/tag/uci'.";

/// Longest accepted request line, in bytes.
pub const MAX_LINE_LENGTH: usize = 8 * 1024 * 1024;

/// Line decoder that hands malformed lines to the caller instead of ending
/// the stream. Only I/O errors are fatal.
struct RequestLines(LinesCodec);

impl RequestLines {
    fn new() -> Self {
        Self(LinesCodec::new_with_max_length(MAX_LINE_LENGTH))
    }

    fn split(
        result: Result<Option<String>, LinesCodecError>,
    ) -> std::io::Result<Option<Result<String, LinesCodecError>>> {
        match result {
            Ok(line) => Ok(line.map(Ok)),
            Err(LinesCodecError::Io(e)) => Err(e),
            Err(e) => Ok(Some(Err(e))),
        }
    }
}

impl Decoder for RequestLines {
    type Item = Result<String, LinesCodecError>;
    type Error = std::io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> std::io::Result<Option<Self::Item>> {
        Self::split(self.0.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> std::io::Result<Option<Self::Item>> {
        Self::split(self.0.decode_eof(buf))
    }
}

pub struct McpServer {
    registry: Arc<ToolRegistry>,
    info: ServerInfo,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            info: ServerInfo {
                name: "openml-mcp".to_string(),
                title: Some("OpenML Explorer".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn start(self) -> Result<()> {
        tracing::info!(tools = self.registry.len(), "MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve requests read from `reader`, writing responses to `writer`.
    ///
    /// Every request runs on its own task, so responses may be written in a
    /// different order than the requests arrived. A line that is not UTF-8 or
    /// exceeds [`MAX_LINE_LENGTH`] gets a parse error and the session goes on.
    /// Returns once the reader is exhausted and every in-flight request has
    /// been answered, or on an I/O error.
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut lines = FramedRead::new(reader, RequestLines::new());
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let writer_task = tokio::spawn(async move {
            let mut sink = FramedWrite::new(writer, LinesCodec::new());
            while let Some(response) = rx.recv().await {
                let line = serde_json::to_string(&response).context("Failed to encode response")?;
                sink.send(line).await.context("Failed to write response")?;
            }
            Ok::<_, anyhow::Error>(())
        });

        let server = Arc::new(self);
        while let Some(line) = lines.next().await {
            let line = match line.context("Failed to read request")? {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "Unreadable request line");
                    let _ = tx.send(JsonRpcResponse::error(
                        serde_json::Value::Null,
                        JsonRpcError::parse_error(),
                    ));
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let server = server.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_line(&line).await {
                    // The writer only stops early if the output is gone.
                    let _ = tx.send(response);
                }
            });
        }

        drop(tx);
        writer_task.await.context("Response writer panicked")??;
        tracing::info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw JSON-RPC message. Notifications produce no response.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable JSON-RPC message");
                return Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id.unwrap_or(serde_json::Value::Null),
                JsonRpcError::invalid_request(),
            ));
        }

        let Some(id) = request.id.clone() else {
            tracing::debug!(method = %request.method, "Notification received");
            return None;
        };

        tracing::debug!(method = %request.method, id = %id, "Request received");
        match self.handle_request(&request.method, request.params).await {
            Ok(result) => Some(JsonRpcResponse::success(id, result)),
            Err(error) => Some(JsonRpcResponse::error(id, error)),
        }
    }

    async fn handle_request(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, JsonRpcError> {
        match method {
            "initialize" => self.initialize(params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => to_value(&ListToolsResult {
                tools: self.registry.list_schemas(),
            }),
            "tools/call" => self.call_tool(params).await,
            other => {
                tracing::warn!(method = other, "Unknown method");
                Err(JsonRpcError::method_not_found(other))
            }
        }
    }

    fn initialize(&self, params: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
        let params: InitializeParams = serde_json::from_value(params.unwrap_or_default())
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e)))?;

        if let Some(ref client) = params.client_info {
            tracing::info!(client = %client.name, version = %client.version, "Client connected");
        }

        to_value(&InitializeResult {
            protocol_version: negotiate_protocol_version(&params.protocol_version).to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: self.info.clone(),
            instructions: Some(INSTRUCTIONS.to_string()),
        })
    }

    async fn call_tool(&self, params: Option<serde_json::Value>) -> Result<serde_json::Value, JsonRpcError> {
        let params: CallToolParams = serde_json::from_value(params.unwrap_or_default())
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)))?;

        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

        tracing::debug!(tool = %params.name, "Calling tool");
        let result = tool
            .execute(params.arguments)
            .await
            .map_err(|e| JsonRpcError::invalid_params(format!("{:#}", e)))?;

        to_value(&result)
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
