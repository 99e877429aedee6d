//! Unified error types for the SpeedList core
//!
//! This module defines error types for each layer:
//! - `GatewayError`: remote shopping list API errors
//! - `IdentityError`: anonymous identity persistence errors
//! - `ClipboardError`: platform clipboard errors
//! - `AppError`: errors surfaced to the user at the point of action

use thiserror::Error;

use crate::domain::ports::RemoteOp;

/// Remote shopping list API errors
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Deserialization(String),
}

impl GatewayError {
    /// Success status but unusable payload
    pub fn is_malformed(&self) -> bool {
        matches!(self, GatewayError::Deserialization(_))
    }
}

/// Anonymous identity errors
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Identity file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No configuration directory available for the identity file")]
    NoConfigDir,
}

/// Platform clipboard errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard not supported on this platform")]
    Unsupported,

    #[error("Failed to spawn clipboard command: {0}")]
    Spawn(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("A {0} request is still in flight")]
    Busy(RemoteOp),

    #[error("Remote {op} failed: {source}")]
    Remote {
        op: RemoteOp,
        #[source]
        source: GatewayError,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),
}

impl AppError {
    pub fn remote(op: RemoteOp, source: GatewayError) -> Self {
        AppError::Remote { op, source }
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) | AppError::InvalidState(msg) => {
                msg.clone()
            }
            AppError::Busy(_) => "Please wait for the current request to finish.".to_string(),
            AppError::Remote { source, .. } if source.is_malformed() => {
                "An error occurred while processing the response. Please try again.".to_string()
            }
            AppError::Remote { op, .. } => op.failure_message().to_string(),
            AppError::Clipboard(_) => "Failed to copy to clipboard. Please try again.".to_string(),
            AppError::Identity(e) => e.to_string(),
        }
    }
}
