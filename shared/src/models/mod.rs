//! Data models
//!
//! Transfer shapes exchanged over the HTTP API.

pub mod employee;

// Re-exports
pub use employee::*;
