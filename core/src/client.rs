//! The network client: one validated, logged HTTP round-trip per call.
//!
//! # Design
//! `NetworkClient` holds its two injected collaborators and nothing else.
//! Every call runs the same path: validate the URL, merge the default
//! `content-type` with caller headers, emit one debug line, hand the request
//! to the transport, decode the body. Failures come back as data — the
//! methods never panic and the transport's error object reaches the caller
//! unchanged after a single error line is logged.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::http::{
    merge_headers, HttpMethod, HttpRequest, RequestOptions, Transport, TransportError,
};
use crate::logger::{LogLevel, Logger};

/// Header attached to every dispatched request unless the caller overrides it.
const DEFAULT_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Decoded outcome of a completed round-trip.
///
/// `status` is whatever the server answered, 2xx or not; interpreting it is
/// the caller's business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchResult {
    pub result: serde_json::Value,
    pub status: u16,
}

/// HTTP client with injected transport and logging.
///
/// Stateless after construction: methods take `&self`, hold no interior
/// mutability, and concurrent calls on one instance are independent.
pub struct NetworkClient<T: Transport> {
    transport: T,
    logger: Arc<dyn Logger>,
}

impl<T: Transport> NetworkClient<T> {
    pub fn new(transport: T, logger: Arc<dyn Logger>) -> Self {
        Self { transport, logger }
    }

    /// Perform a GET request against `url`.
    pub fn get(&self, url: &str, options: RequestOptions) -> Result<FetchResult, ClientError> {
        self.dispatch(HttpMethod::Get, url, options)
    }

    /// Perform a POST request against `url`. `options.body` passes through
    /// to the transport untouched.
    pub fn post(&self, url: &str, options: RequestOptions) -> Result<FetchResult, ClientError> {
        self.dispatch(HttpMethod::Post, url, options)
    }

    fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        options: RequestOptions,
    ) -> Result<FetchResult, ClientError> {
        if url.is_empty() {
            return Err(ClientError::MissingUrl);
        }

        let defaults = vec![(
            DEFAULT_CONTENT_TYPE.0.to_string(),
            DEFAULT_CONTENT_TYPE.1.to_string(),
        )];
        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers: merge_headers(defaults, &options.headers),
            body: options.body,
        };

        self.logger
            .log(LogLevel::Debug, &format!("Fetching {url} with method {method}"));

        match self.fetch_and_decode(&request) {
            Ok(result) => Ok(result),
            Err(err) => {
                self.logger
                    .log(LogLevel::Error, &format!("Unable to fetch {url}: {}", err.message));
                Err(ClientError::Transport(err))
            }
        }
    }

    /// Run the round-trip and decode the body. Everything that can go wrong
    /// past URL validation lands here as a `TransportError`, including a
    /// body that is not valid JSON.
    fn fetch_and_decode(&self, request: &HttpRequest) -> Result<FetchResult, TransportError> {
        let response = self.transport.fetch(request)?;
        let result = serde_json::from_str(&response.body)
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(FetchResult {
            result,
            status: response.status,
        })
    }
}
