//! SpeedList client core
//!
//! Keeps a local shopping list in sync with the remote list resource and
//! formats it for clipboard export.
//! Uses hexagonal (ports & adapters) architecture:
//! - `domain`: entities and the port traits the core depends on
//! - `app`: list store, edit controller, reducer, formatter and the session driving them
//! - `adapters`: HTTP gateway, persisted identity, system clipboard

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{AppError, ClipboardError, GatewayError, IdentityError};
