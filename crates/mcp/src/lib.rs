// MCP (Model Context Protocol) server for the OpenML REST API
// Exposes datasets, tasks, flows, runs, setups and studies as agent tools.

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::McpConfig;
pub use server::McpServer;
