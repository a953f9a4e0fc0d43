//! Validation logic for RFC compliance.
//!
//! Checks components against the required-field rules of RFC 5545 before
//! they are written out.

pub mod component;

pub use component::{ValidationError, ValidationErrorKind, validate_component};
