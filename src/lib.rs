//! SSN Validator - U.S. Social Security Number validation with an MCP server front end.
//!
//! The core is a pure predicate, [`is_valid_ssn`], that strips dashes and
//! checks the remaining nine digits against structural rules and a denylist
//! of well-known placeholder numbers. Everything else wraps that predicate.
//!
//! # Architecture
//!
//! - **domain**: The predicate and the `SocialSecurityNumber` value object
//! - **validation**: `Validator` capability trait and the configurable `SsnValidator`
//! - **error**: Custom error types for configuration and server errors
//! - **config**: Configuration management from environment variables
//! - **metrics**: Validation counters
//! - **server**: MCP protocol server exposing validation tools

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod server;
pub mod validation;

pub use config::Config;
pub use domain::{
    is_valid_ssn, is_valid_ssn_opt, is_valid_ssn_value, SocialSecurityNumber, ValidationError,
};
pub use error::{ConfigError, ServerError};
pub use metrics::{Metrics, MetricsSummary};
pub use server::SsnMcpServer;
pub use validation::{Denylist, SsnValidator, Validator};
