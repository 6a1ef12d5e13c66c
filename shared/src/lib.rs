//! Shared types for the employee service
//!
//! Transfer shapes and the unified error/response types used at the HTTP
//! boundary.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Employee, SalaryRange};
