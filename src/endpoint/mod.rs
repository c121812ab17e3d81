//! Endpoint layer: transport-agnostic request/response mapping.
//!
//! # Responsibilities
//! - Define the request/response value types for each operation
//! - Invoke the domain service and build the response value
//! - Absorb domain errors into the response body
//!
//! # Design Decisions
//! - Each route has its own concrete request type resolved at compile
//!   time; there is no dynamically-typed payload to downcast
//! - A domain rejection is data, not control flow: the endpoint always
//!   returns a response value, never an error, so the transport cannot
//!   turn a business rejection into an HTTP failure

use serde::{Deserialize, Serialize};

use crate::service::StringService;

/// Request body for the uppercase operation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UppercaseRequest {
    /// The string to transform. Absent fields decode as the empty string.
    pub s: String,
}

/// Response body for the uppercase operation.
///
/// Exactly one outcome holds: a successful transformation (`v` set, `err`
/// omitted from the JSON) or a domain rejection (`v` empty, `err` set).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UppercaseResponse {
    /// The transformed string; empty when the operation was rejected.
    pub v: String,
    /// Human-readable rejection message, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

/// Request body for the count operation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CountRequest {
    /// The string to measure.
    pub s: String,
}

/// Response body for the count operation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountResponse {
    /// Number of Unicode scalar values in the input.
    pub v: usize,
}

/// Uppercase endpoint.
pub fn uppercase(svc: &StringService, req: UppercaseRequest) -> UppercaseResponse {
    match svc.uppercase(&req.s) {
        Ok(v) => UppercaseResponse { v, err: None },
        Err(e) => {
            tracing::debug!(error = %e, "uppercase rejected");
            UppercaseResponse {
                v: String::new(),
                err: Some(e.to_string()),
            }
        }
    }
}

/// Count endpoint. Total: every decoded request produces a count.
pub fn count(svc: &StringService, req: CountRequest) -> CountResponse {
    CountResponse {
        v: svc.count(&req.s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_success_omits_err() {
        let svc = StringService::new();
        let resp = uppercase(&svc, UppercaseRequest { s: "hello".into() });
        assert_eq!(resp.v, "HELLO");
        assert!(resp.err.is_none());

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"v":"HELLO"}"#);
    }

    #[test]
    fn uppercase_empty_input_becomes_response_data() {
        let svc = StringService::new();
        let resp = uppercase(&svc, UppercaseRequest { s: String::new() });
        assert_eq!(resp.v, "");
        assert_eq!(resp.err.as_deref(), Some("Empty string"));

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"v":"","err":"Empty string"}"#);
    }

    #[test]
    fn count_wraps_the_domain_result() {
        let svc = StringService::new();
        let resp = count(&svc, CountRequest { s: "hello".into() });
        assert_eq!(resp.v, 5);

        let resp = count(&svc, CountRequest { s: String::new() });
        assert_eq!(resp.v, 0);
    }

    #[test]
    fn requests_decode_missing_field_as_empty() {
        let req: UppercaseRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.s, "");

        let req: CountRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.s, "");
    }
}
