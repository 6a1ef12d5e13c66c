//! Repository Module
//!
//! CRUD operations over SurrealDB tables.

pub mod employee;

// Re-exports
pub use employee::EmployeeRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    /// The store accepted a write but returned no row
    #[error("Write returned no record: {0}")]
    EmptyWrite(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// API 层只暴露记录键 (不带 "employee:" 前缀)：
//   - 读取: SELECT record::id(id) AS id ...
//   - 定位: type::thing('employee', $id)
// 记录键一律按字符串原样处理 (不裁剪空白)，"1" 与 1 不做区分。
// 空字符串不对应任何记录：读取为空，删除直接完成。

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
