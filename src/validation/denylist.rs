//! Forged-SSN denylist policy.

use crate::domain::errors::ValidationError;
use crate::domain::ssn::{normalize, FORGED_SSNS};
use std::collections::BTreeSet;

/// Values rejected even though they are structurally valid.
///
/// The built-in placeholders in [`FORGED_SSNS`] are always present. A
/// deployment can add its own known test or fraud values on top of them;
/// entries are normalized the same way candidates are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    extra: BTreeSet<String>,
}

impl Denylist {
    /// Build a denylist with additional entries.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDenylistEntry` for an entry that does
    /// not normalize to nine ASCII digits.
    pub fn with_extra<I, S>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extra = BTreeSet::new();

        for entry in entries {
            let entry = entry.as_ref();
            let digits = normalize(entry);
            if digits.len() != 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ValidationError::InvalidDenylistEntry(entry.to_string()));
            }
            if !FORGED_SSNS.contains(&digits.as_str()) {
                extra.insert(digits);
            }
        }

        Ok(Self { extra })
    }

    /// Whether a normalized nine-digit value is denied.
    pub fn contains(&self, digits: &str) -> bool {
        FORGED_SSNS.contains(&digits) || self.extra.contains(digits)
    }

    /// Number of policy-supplied entries (built-ins excluded).
    pub fn extra_len(&self) -> usize {
        self.extra.len()
    }

    /// Iterate over the policy-supplied entries in sorted order.
    pub fn extra_entries(&self) -> impl Iterator<Item = &str> {
        self.extra.iter().map(String::as_str)
    }
}
