//! Social Security Number validation and value object.
//!
//! An SSN is accepted when, after removing every `-`, it is exactly nine
//! ASCII digits laid out as area (3), group (2) and serial (4) and none of
//! the exclusion rules apply:
//!
//! - all nine digits identical (`111-11-1111`)
//! - a publicly known placeholder value (see [`FORGED_SSNS`])
//! - area `000`, `666` or `900`-`999`
//! - group `00`
//! - serial `0000`
//!
//! Validation never fails with an error. Every rejected input, including
//! non-string input at the untyped boundary, is simply `false`.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Placeholder SSNs that circulate in documentation, advertising and test
/// data. They are structurally valid but always rejected.
pub const FORGED_SSNS: [&str; 3] = ["123456789", "219099999", "078051120"];

// `[0-9]` rather than `\d`: the regex crate's `\d` matches any Unicode digit.
static SSN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<area>[0-9]{3})(?P<group>[0-9]{2})(?P<serial>[0-9]{4})$")
        .expect("Failed to compile SSN pattern")
});

/// Remove every dash from a candidate SSN.
///
/// No other characters are touched: whitespace, dots and non-ASCII digits
/// survive normalization and make the value invalid.
pub fn normalize(candidate: &str) -> String {
    candidate.replace('-', "")
}

/// Check whether a string is a plausible SSN.
///
/// Dash placement is irrelevant: `"123-45-6788"`, `"12345-6788"` and
/// `"123456788"` all give the same answer.
///
/// # Example
///
/// ```
/// use ssn_validator::domain::is_valid_ssn;
///
/// assert!(is_valid_ssn("123-45-6788"));
/// assert!(!is_valid_ssn("123-45-6789")); // well-known placeholder
/// assert!(!is_valid_ssn("666-12-3456")); // area 666 is never issued
/// ```
pub fn is_valid_ssn(candidate: &str) -> bool {
    let digits = normalize(candidate);

    let caps = match SSN_PATTERN.captures(&digits) {
        Some(caps) => caps,
        None => return false,
    };

    if is_repeated_digit(&digits) || FORGED_SSNS.contains(&digits.as_str()) {
        return false;
    }

    let area = &caps["area"];
    if area == "000" || area == "666" || area.starts_with('9') {
        return false;
    }

    &caps["group"] != "00" && &caps["serial"] != "0000"
}

/// Check an untyped value, as handed over by a JSON-speaking caller.
///
/// Anything other than a JSON string (null, numbers, arrays, objects,
/// booleans) is invalid.
pub fn is_valid_ssn_value(candidate: &Value) -> bool {
    match candidate {
        Value::String(s) => is_valid_ssn(s),
        _ => false,
    }
}

/// Check an optional value. An absent value is invalid.
pub fn is_valid_ssn_opt(candidate: Option<&str>) -> bool {
    candidate.is_some_and(is_valid_ssn)
}

fn is_repeated_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

/// A validated U.S. Social Security Number.
///
/// The number is stored in normalized form (nine digits, no dashes). It can
/// only be obtained through [`SocialSecurityNumber::new`], [`FromStr`] or
/// deserialization, all of which apply [`is_valid_ssn`]. Using this type as a
/// struct field makes deserializing the struct validate the field.
///
/// `Debug` output masks everything but the serial.
///
/// # Example
///
/// ```
/// use ssn_validator::domain::SocialSecurityNumber;
///
/// let ssn = SocialSecurityNumber::new("123-45-6788").unwrap();
/// assert_eq!(ssn.as_str(), "123456788");
/// assert_eq!(ssn.to_string(), "123-45-6788");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SocialSecurityNumber(String);

impl SocialSecurityNumber {
    /// Create a new SocialSecurityNumber, validating the value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSsn` if the value is not a valid SSN.
    pub fn new(ssn: impl Into<String>) -> Result<Self, ValidationError> {
        let ssn = ssn.into();

        if !is_valid_ssn(&ssn) {
            return Err(ValidationError::InvalidSsn {
                length: ssn.chars().count(),
            });
        }

        Ok(Self(normalize(&ssn)))
    }

    /// Get the normalized nine-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying normalized String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The area number (first three digits).
    pub fn area(&self) -> &str {
        &self.0[0..3]
    }

    /// The group number (digits four and five).
    pub fn group(&self) -> &str {
        &self.0[3..5]
    }

    /// The serial number (last four digits).
    pub fn serial(&self) -> &str {
        &self.0[5..9]
    }

    /// Render as `AAA-GG-SSSS`.
    pub fn formatted(&self) -> String {
        format!("{}-{}-{}", self.area(), self.group(), self.serial())
    }
}

impl FromStr for SocialSecurityNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as normalized string
impl Serialize for SocialSecurityNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for SocialSecurityNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SocialSecurityNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SocialSecurityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl fmt::Debug for SocialSecurityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = format!("***-**-{}", self.serial());
        f.debug_tuple("SocialSecurityNumber").field(&masked).finish()
    }
}
