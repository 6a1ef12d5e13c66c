//! 统一错误处理
//!
//! Re-exports the shared error types and maps repository failures onto them:
//!
//! | RepoError | ErrorCode | HTTP |
//! |-----------|-----------|------|
//! | Database | DatabaseError | 500 |
//! | EmptyWrite | InternalError | 500 |

pub use shared::error::{AppError, AppResult, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::database(msg),
            e @ RepoError::EmptyWrite(_) => AppError::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_repo_error_mapping() {
        let err: AppError = RepoError::Database("connection refused".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "connection refused");

        let err: AppError = RepoError::EmptyWrite("create employee".into()).into();
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.message, "Write returned no record: create employee");
    }
}
