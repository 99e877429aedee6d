//! Domain layer
//!
//! Contains the shopping list model with no external I/O.
//! - `entities`: shopping list items, owner identifier, form fields
//! - `ports`: Trait definitions for the remote resource, identity and clipboard

pub mod entities;
pub mod ports;
