//! MCP tool handlers for the SSN validator server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::{ServerError, ServerResult};
use crate::metrics::Metrics;
use crate::validation::{SsnValidator, Validator};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes SSN validation as tools.
#[derive(Clone)]
pub struct SsnMcpServer {
    validator: Arc<SsnValidator>,
    metrics: Metrics,
    max_batch_size: usize,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for SsnMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "ssn-validator".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Validates U.S. Social Security Numbers. Returns only valid/invalid; never says which rule failed.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct ValidateSsnParams {
    /// Candidate value. Anything other than a string is invalid.
    #[serde(default)]
    value: Value,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ValidateSsnBatchParams {
    /// Candidate values, validated independently.
    values: Vec<Value>,
}

/// Result of validating a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SsnValidationResponse {
    pub valid: bool,
}

/// Result of validating a batch of candidates, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchValidationResponse {
    pub results: Vec<bool>,
    pub valid_count: usize,
    pub invalid_count: usize,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: ServerError) -> McpError {
    let code = match e {
        ServerError::BatchTooLarge { .. } => ErrorCode::INVALID_PARAMS,
        ServerError::Serialization(_) => ErrorCode::INTERNAL_ERROR,
    };

    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result<T: Serialize>(response: &T) -> ServerResult<CallToolResult> {
    let json_response = serde_json::to_string_pretty(response)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

// JSON type name, logged in place of the candidate itself
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl SsnMcpServer {
    /// Validate one candidate and record the outcome.
    pub fn check_value(&self, value: &Value) -> SsnValidationResponse {
        let valid = self.validator.validate(value);
        self.metrics.record_validation(valid, value.is_string());

        SsnValidationResponse { valid }
    }

    /// Validate a batch of candidates.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::BatchTooLarge` when the batch exceeds the
    /// configured maximum. No candidate is validated in that case.
    pub fn check_batch(&self, values: &[Value]) -> ServerResult<BatchValidationResponse> {
        if values.len() > self.max_batch_size {
            return Err(ServerError::BatchTooLarge {
                size: values.len(),
                max: self.max_batch_size,
            });
        }

        let results: Vec<bool> = values.iter().map(|v| self.check_value(v).valid).collect();
        let valid_count = results.iter().filter(|&&valid| valid).count();

        Ok(BatchValidationResponse {
            invalid_count: results.len() - valid_count,
            valid_count,
            results,
        })
    }

    /// The metrics collector shared by all tool calls.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

// Tool router implementation
#[tool_router]
impl SsnMcpServer {
    /// Create a new SSN validator MCP server.
    pub fn new(validator: Arc<SsnValidator>, metrics: Metrics, max_batch_size: usize) -> Self {
        Self {
            validator,
            metrics,
            max_batch_size,
            tool_router: Self::tool_router(),
        }
    }

    /// Validate a single Social Security Number.
    #[tool(
        description = "Check whether a value is a plausible U.S. Social Security Number. Dashes are ignored. Rejects malformed values, non-strings, area 000/666/900-999, group 00, serial 0000, all-identical digits and well-known placeholder numbers. Returns {\"valid\": bool}."
    )]
    async fn validate_ssn(
        &self,
        params: Parameters<ValidateSsnParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!(
            "MCP Handler: validate_ssn called (kind={}, len={})",
            value_kind(&params.value),
            params.value.as_str().map_or(0, str::len)
        );

        let response = self.check_value(&params.value);
        json_result(&response).map_err(to_mcp_error)
    }

    /// Validate several Social Security Numbers in one call.
    #[tool(
        description = "Validate a list of values as U.S. Social Security Numbers. Returns results in input order plus valid and invalid counts."
    )]
    async fn validate_ssn_batch(
        &self,
        params: Parameters<ValidateSsnBatchParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::debug!(
            "MCP Handler: validate_ssn_batch called (size={})",
            params.values.len()
        );

        let response = self.check_batch(&params.values).map_err(|e| {
            tracing::warn!("Rejected batch: {}", e);
            to_mcp_error(e)
        })?;

        json_result(&response).map_err(to_mcp_error)
    }

    /// Report validation counters.
    #[tool(description = "Get counters of validations performed since the server started")]
    async fn get_validation_metrics(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.metrics.summary()).map_err(to_mcp_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Denylist;
    use serde_json::json;

    fn test_server(max_batch_size: usize) -> SsnMcpServer {
        SsnMcpServer::new(
            Arc::new(SsnValidator::default()),
            Metrics::new(),
            max_batch_size,
        )
    }

    #[test]
    fn test_check_value() {
        let server = test_server(10);
        assert!(server.check_value(&json!("123-45-6788")).valid);
        assert!(!server.check_value(&json!("078-05-1120")).valid);
        assert!(!server.check_value(&Value::Null).valid);
        assert!(!server.check_value(&json!(123456788)).valid);

        assert_eq!(server.metrics().validations_total(), 4);
        assert_eq!(server.metrics().valid_total(), 1);
        assert_eq!(server.metrics().non_string_total(), 2);
    }

    #[test]
    fn test_check_value_uses_configured_denylist() {
        let denylist = Denylist::with_extra(["457-55-5462"]).unwrap();
        let server = SsnMcpServer::new(Arc::new(SsnValidator::new(denylist)), Metrics::new(), 10);

        assert!(!server.check_value(&json!("457-55-5462")).valid);
        assert!(server.check_value(&json!("457-55-5463")).valid);
    }

    #[test]
    fn test_check_batch_preserves_order() {
        let server = test_server(10);
        let values = vec![
            json!("123-45-6788"),
            json!("111-11-1111"),
            json!(null),
            json!("123456788"),
        ];

        let response = server.check_batch(&values).unwrap();
        assert_eq!(response.results, vec![true, false, false, true]);
        assert_eq!(response.valid_count, 2);
        assert_eq!(response.invalid_count, 2);
    }

    #[test]
    fn test_check_batch_empty() {
        let server = test_server(10);
        let response = server.check_batch(&[]).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.valid_count, 0);
        assert_eq!(response.invalid_count, 0);
    }

    #[test]
    fn test_check_batch_too_large() {
        let server = test_server(2);
        let values = vec![json!("123-45-6788"); 3];

        match server.check_batch(&values) {
            Err(ServerError::BatchTooLarge { size, max }) => {
                assert_eq!(size, 3);
                assert_eq!(max, 2);
            }
            other => panic!("Expected BatchTooLarge, got: {:?}", other),
        }
        assert_eq!(server.metrics().validations_total(), 0);
    }

    #[test]
    fn test_params_missing_value_is_null() {
        let params: ValidateSsnParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.value, Value::Null);
    }

    #[tokio::test]
    async fn test_validate_ssn_tool_succeeds_for_invalid_value() {
        let server = test_server(10);
        let result = server
            .validate_ssn(Parameters(ValidateSsnParams {
                value: json!("000-12-3456"),
            }))
            .await;

        assert!(result.is_ok(), "An invalid SSN is a result, not an error");
        assert_eq!(server.metrics().invalid_total(), 1);
    }

    #[tokio::test]
    async fn test_validate_ssn_batch_tool_rejects_oversized_batch() {
        let server = test_server(1);
        let err = server
            .validate_ssn_batch(Parameters(ValidateSsnBatchParams {
                values: vec![json!("123-45-6788"), json!("123-45-6788")],
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_get_validation_metrics_tool() {
        let server = test_server(10);
        server.check_value(&json!("123-45-6788"));

        let result = server.get_validation_metrics().await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!("x")), "string");
        assert_eq!(value_kind(&json!(1)), "number");
        assert_eq!(value_kind(&json!([])), "array");
    }

    #[test]
    fn test_server_info() {
        let server = test_server(10);
        let info = server.get_info();
        assert_eq!(info.server_info.name, "ssn-validator");
        assert!(info.capabilities.tools.is_some());
    }
}
