//! MCP server exposing SSN validation.
//!
//! This module provides the MCP protocol server that lets an external
//! validation framework or AI assistant call the SSN predicate through the
//! Model Context Protocol.

pub mod handlers;

pub use handlers::{BatchValidationResponse, SsnMcpServer, SsnValidationResponse};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the SSN validator MCP server with stdio transport.
///
/// Communicates via stdin/stdout and returns once the client disconnects.
pub async fn run_server(server: SsnMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
