//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod clipboard;
pub mod http;
pub mod identity;

pub use clipboard::SystemClipboard;
pub use http::HttpShoppingListGateway;
pub use identity::{resolve_owner, FileIdentityProvider};
