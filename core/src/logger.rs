//! Injected logging capability.
//!
//! The client is handed a `Logger` at construction and never builds one
//! itself. `LogFacade` is the stock implementation for embedders who already
//! run a `log`-compatible subscriber; tests substitute a recording double.

use std::fmt;

/// Severity of a log line emitted by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Capability that records one log line. No return value is consumed.
///
/// Shared behind `Arc` by the client; implementations own their thread
/// safety.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

/// Forwards every line to the `log` crate facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

fn facade_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

impl Logger for LogFacade {
    fn log(&self, level: LogLevel, message: &str) {
        log::log!(facade_level(level), "{message}");
    }
}
