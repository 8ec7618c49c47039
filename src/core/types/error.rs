use std::any::Any;
use std::io;

use strum::Display;
use thiserror::Error;

/// Errors raised by the harness itself (CLI, config, logging, output).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("Unknown target: {0}")]
    UnknownTarget(String),
    #[error("{0}")]
    Custom(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Category of a fault observed while a target was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FaultKind {
    InvalidInput,
    Io,
    Panic,
}

/// A fault signalled by a target (or by the harness while measuring its side
/// effects). Rendered as `"<kind>: <message>"` when recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TargetFault {
    pub kind: FaultKind,
    pub message: String,
}

impl TargetFault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(FaultKind::InvalidInput, message)
    }

    /// Convert a payload captured by `catch_unwind` into a fault.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Self::new(FaultKind::Panic, message)
    }
}

impl From<io::Error> for TargetFault {
    fn from(err: io::Error) -> Self {
        Self::new(FaultKind::Io, err.to_string())
    }
}
