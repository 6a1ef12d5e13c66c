//! Database Module
//!
//! Opens the embedded SurrealDB instance (in-memory or RocksDB) and defines the
//! `employee` table.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::{Config, Result};

const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS employee_salary ON TABLE employee FIELDS salary;
"#;

/// Database service, owns the SurrealDB handle
///
/// The handle is cheap to clone and shared by every request; it is never
/// re-established after a failure.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the store selected by `config.db_path`
    pub async fn new(config: &Config) -> Result<Self> {
        let db = if config.is_in_memory() {
            Surreal::new::<Mem>(()).await?
        } else {
            Surreal::new::<RocksDb>(config.db_path.as_str()).await?
        };

        db.use_ns(config.db_namespace.as_str())
            .use_db(config.db_database.as_str())
            .await?;

        tracing::info!(
            path = %config.db_path,
            namespace = %config.db_namespace,
            database = %config.db_database,
            "Database connection established"
        );

        let service = Self { db };
        service.define_schema().await?;
        Ok(service)
    }

    async fn define_schema(&self) -> Result<()> {
        self.db.query(SCHEMA).await?.check()?;
        tracing::info!("Database schema applied");
        Ok(())
    }

    /// Round-trip a trivial statement through the store
    pub async fn ping(&self) -> Result<()> {
        self.db.query("RETURN true").await?.check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_in_memory() {
        let config = Config::with_overrides(crate::core::config::IN_MEMORY_DB, 0);
        let service = DbService::new(&config).await.unwrap();
        service.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_open_rocksdb_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("employee.db");
        let config = Config::with_overrides(path.to_string_lossy().to_string(), 0);

        let service = DbService::new(&config).await.unwrap();
        service.ping().await.unwrap();
        assert!(path.exists());
    }
}
