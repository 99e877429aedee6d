//! Domain ports (traits)
//!
//! Port traits define interfaces that the core requires.
//! Adapters provide concrete implementations of these traits.

pub mod clipboard;
pub mod gateway;
pub mod identity;

pub use clipboard::Clipboard;
pub use gateway::{RemoteOp, ShoppingListGateway};
pub use identity::{IdentityProvider, StaticIdentity};
