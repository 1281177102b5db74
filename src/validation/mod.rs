//! Validation capability layer.
//!
//! Frameworks that need to check a field call a [`Validator`] directly with
//! the field's value. [`SsnValidator`] is the SSN rule with an optional
//! deployment-specific [`Denylist`].

mod denylist;
mod validator;

pub use denylist::Denylist;
pub use validator::{SsnValidator, Validator};
