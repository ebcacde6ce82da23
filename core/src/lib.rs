//! Minimal SDK network client with injected transport and logging.
//!
//! # Overview
//! `NetworkClient` performs one `GET`/`POST` round-trip per call: it
//! validates the URL, injects a default `content-type: application/json`
//! header (caller headers win on collision), logs the attempt, and
//! normalizes every outcome into `Result<FetchResult, ClientError>`.
//!
//! # Design
//! - Both collaborators arrive at construction: a `Transport` (executes the
//!   round-trip) and a `Logger` (records one debug line per dispatched call,
//!   plus one error line per failure). The core performs no I/O of its own.
//! - No retries, timeouts, or status interpretation — a non-2xx response is
//!   returned as data with its status untouched.
//! - Errors are data: `get`/`post` always return, never panic, and the
//!   transport's error object reaches the caller unchanged.

pub mod client;
pub mod error;
pub mod http;
pub mod logger;

pub use client::{FetchResult, NetworkClient};
pub use error::ClientError;
pub use http::{
    merge_headers, HttpMethod, HttpRequest, HttpResponse, RequestOptions, Transport,
    TransportError,
};
pub use logger::{LogFacade, LogLevel, Logger};
