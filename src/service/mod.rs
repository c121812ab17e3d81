//! String-processing domain service.
//!
//! # Responsibilities
//! - Pure string operations behind a stateless service value
//! - Domain validation (uppercasing rejects the empty string)
//!
//! # Design Decisions
//! - No internal state: the service is a zero-sized value copied into
//!   application state, so requests never contend on it
//! - Character counts are Unicode scalar values, not bytes

use thiserror::Error;

/// Domain-level failures for string operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Uppercasing is undefined for the empty string.
    #[error("Empty string")]
    EmptyInput,
}

/// Stateless string-processing service.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringService;

impl StringService {
    /// Create a new service instance.
    pub fn new() -> Self {
        Self
    }

    /// Convert `s` to its Unicode uppercase form.
    ///
    /// Locale-independent: uses the default Unicode case mapping, so
    /// non-alphabetic characters pass through unchanged. The empty string
    /// is rejected with [`ServiceError::EmptyInput`].
    pub fn uppercase(&self, s: &str) -> Result<String, ServiceError> {
        if s.is_empty() {
            return Err(ServiceError::EmptyInput);
        }
        Ok(s.to_uppercase())
    }

    /// Number of Unicode scalar values in `s`.
    ///
    /// Total function: defined for the empty string (returns 0).
    pub fn count(&self, s: &str) -> usize {
        s.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_maps_alphabetic_characters() {
        let svc = StringService::new();
        assert_eq!(svc.uppercase("hello").unwrap(), "HELLO");
        assert_eq!(svc.uppercase("Hello, World!").unwrap(), "HELLO, WORLD!");
    }

    #[test]
    fn uppercase_leaves_non_alphabetic_input_unchanged() {
        let svc = StringService::new();
        assert_eq!(svc.uppercase("1234 !?").unwrap(), "1234 !?");
    }

    #[test]
    fn uppercase_accepts_already_uppercase_input() {
        let svc = StringService::new();
        assert_eq!(svc.uppercase("HELLO").unwrap(), "HELLO");
    }

    #[test]
    fn uppercase_is_idempotent() {
        let svc = StringService::new();
        let once = svc.uppercase("héllo wörld").unwrap();
        let twice = svc.uppercase(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn uppercase_rejects_empty_input() {
        let svc = StringService::new();
        assert_eq!(svc.uppercase(""), Err(ServiceError::EmptyInput));
    }

    #[test]
    fn empty_input_error_message_is_stable() {
        // The message is part of the wire contract via the endpoint layer.
        assert_eq!(ServiceError::EmptyInput.to_string(), "Empty string");
    }

    #[test]
    fn count_returns_scalar_value_count() {
        let svc = StringService::new();
        assert_eq!(svc.count("hello"), 5);
        assert_eq!(svc.count(""), 0);
        // 'é' is two bytes in UTF-8 but one scalar value.
        assert_eq!(svc.count("héllo"), 5);
    }
}
