//! Unified error system for the employee service
//!
//! - [`ErrorCode`]: Numeric code carried in every error body
//! - [`AppError`]: Error with code and message, rendered as an HTTP response
//! - [`ApiResponse`]: JSON body of an error response
//!
//! # Error Code Ranges
//!
//! - 9xxx: System errors (store failures)
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError};
//!
//! let err = AppError::database("connection refused");
//! let body = ApiResponse::error(&err);
//! assert_eq!(body.code, 9002);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError, AppResult};
