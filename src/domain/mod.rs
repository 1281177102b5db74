//! Domain value objects and types.
//!
//! This module contains the SSN validation predicate and the
//! `SocialSecurityNumber` value object built on top of it. The value object
//! validates at construction time so an invalid SSN can never be represented
//! in the system.

pub mod errors;
pub mod ssn;

pub use errors::ValidationError;
pub use ssn::{
    is_valid_ssn, is_valid_ssn_opt, is_valid_ssn_value, normalize, SocialSecurityNumber,
    FORGED_SSNS,
};
