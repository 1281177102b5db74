//! Validator capability and the SSN implementation.

use super::denylist::Denylist;
use crate::domain::ssn::{is_valid_ssn, normalize};
use serde_json::Value;

/// A single-value validation rule.
///
/// Callers hand over whatever value they hold and get a yes/no answer.
/// Implementations must not fail: anything they cannot interpret is invalid.
pub trait Validator: Send + Sync {
    /// Short identifier for logs and tool output.
    fn name(&self) -> &'static str;

    /// Validate an untyped candidate.
    fn validate(&self, candidate: &Value) -> bool;
}

/// Validates U.S. Social Security Numbers against the structural rules and
/// a forged-value [`Denylist`].
///
/// With the default denylist this is exactly [`is_valid_ssn`].
#[derive(Debug, Clone, Default)]
pub struct SsnValidator {
    denylist: Denylist,
}

impl SsnValidator {
    /// Create a validator with a custom denylist.
    pub fn new(denylist: Denylist) -> Self {
        Self { denylist }
    }

    /// The denylist in use.
    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Validate a string candidate.
    pub fn validate_str(&self, candidate: &str) -> bool {
        is_valid_ssn(candidate) && !self.denylist.contains(&normalize(candidate))
    }
}

impl Validator for SsnValidator {
    fn name(&self) -> &'static str {
        "ssn"
    }

    fn validate(&self, candidate: &Value) -> bool {
        match candidate.as_str() {
            Some(s) => self.validate_str(s),
            None => false,
        }
    }
}
