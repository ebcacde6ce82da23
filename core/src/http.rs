//! HTTP transport types and the transport capability seam.
//!
//! # Design
//! Requests and responses are plain data with owned fields. The client
//! assembles a fully-resolved `HttpRequest` (effective headers included) and
//! hands it to whatever `Transport` it was constructed with — ureq in the
//! integration tests, a scripted double in unit tests. The core crate never
//! performs network I/O itself, which keeps every contract in this crate
//! checkable without a socket.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A fully-resolved request as handed to the transport.
///
/// `headers` are the effective headers: the client's defaults already merged
/// with caller overrides. The transport sends them as-is.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// What a transport hands back when the round-trip completed.
///
/// A completed round-trip with a non-2xx status is still a success at this
/// layer; the status travels through to the caller untouched.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Caller-supplied per-call options.
///
/// `headers` are merged on top of the client defaults (caller wins on exact
/// key collision). `body` is an opaque passthrough; the client performs no
/// serialization of its own.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// The error object a transport raises when the round-trip itself failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// Capability that executes one HTTP round-trip.
///
/// Implementations may be backed by any HTTP library or by canned data in
/// tests. Must be safe to share across concurrent calls.
pub trait Transport: Send + Sync {
    fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Ordered header merge: defaults first, overrides applied on top.
///
/// An override whose key exactly matches an existing entry (case-sensitive)
/// replaces that entry's value in place; unmatched overrides append in their
/// given order. Precedence lives here and nowhere else.
pub fn merge_headers(
    defaults: Vec<(String, String)>,
    overrides: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged = defaults;
    for (key, value) in overrides {
        match merged.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.clone(),
            None => merged.push((key.clone(), value.clone())),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn merge_keeps_defaults_when_no_overrides() {
        let merged = merge_headers(pairs(&[("content-type", "application/json")]), &[]);
        assert_eq!(merged, pairs(&[("content-type", "application/json")]));
    }

    #[test]
    fn merge_appends_new_keys_in_override_order() {
        let merged = merge_headers(
            pairs(&[("content-type", "application/json")]),
            &pairs(&[("If-None-Match", "abcd0123"), ("x-custom", "1")]),
        );
        assert_eq!(
            merged,
            pairs(&[
                ("content-type", "application/json"),
                ("If-None-Match", "abcd0123"),
                ("x-custom", "1"),
            ])
        );
    }

    #[test]
    fn merge_override_replaces_value_in_place() {
        let merged = merge_headers(
            pairs(&[("content-type", "application/json"), ("accept", "*/*")]),
            &pairs(&[("content-type", "text/plain")]),
        );
        assert_eq!(
            merged,
            pairs(&[("content-type", "text/plain"), ("accept", "*/*")])
        );
    }

    #[test]
    fn merge_key_matching_is_case_sensitive() {
        let merged = merge_headers(
            pairs(&[("content-type", "application/json")]),
            &pairs(&[("Content-Type", "text/plain")]),
        );
        assert_eq!(
            merged,
            pairs(&[
                ("content-type", "application/json"),
                ("Content-Type", "text/plain"),
            ])
        );
    }

    #[test]
    fn method_renders_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn transport_error_displays_its_message() {
        let err = TransportError::new("request failed");
        assert_eq!(err.to_string(), "request failed");
    }
}
