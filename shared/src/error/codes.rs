//! Error codes
//!
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
///
/// Represented as `u16` in response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 9xxx: System ====================
    /// Store returned something it should not have
    InternalError = 9001,
    /// Store call failed
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
