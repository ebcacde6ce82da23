//! Error type for client calls.
//!
//! # Design
//! `MissingUrl` gets a dedicated variant because it is the one failure that
//! never reaches the transport; everything the transport raises travels
//! through `Transport` verbatim so callers see the original error object.
//! `get`/`post` never panic and never produce any other error kind.

use std::fmt;

use crate::http::TransportError;

/// Errors returned by `NetworkClient::get` / `NetworkClient::post`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The caller passed an empty URL. Checked before anything else; no
    /// request is dispatched and nothing is logged.
    MissingUrl,

    /// The transport raised an error, surfaced unchanged.
    Transport(TransportError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::MissingUrl => write!(f, "Please provide a URL."),
            ClientError::Transport(err) => write!(f, "{}", err.message),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::MissingUrl => None,
            ClientError::Transport(err) => Some(err),
        }
    }
}
