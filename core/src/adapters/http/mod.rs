//! HTTP adapter for the shopping list REST resource

mod client;

pub use client::HttpShoppingListGateway;
