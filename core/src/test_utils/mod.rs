//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The mocks are in-memory and record the calls made against them.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
