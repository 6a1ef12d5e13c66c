use std::time::Duration;

/// `DB_PATH` value that selects the in-memory engine
pub const IN_MEMORY_DB: &str = "memory";

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件会先被加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | DB_PATH | memory | `memory` 为内存库，否则为 RocksDB 目录 |
/// | DB_NAMESPACE | employee | SurrealDB namespace |
/// | DB_DATABASE | employee | SurrealDB database |
/// | STREAM_INTERVAL_MS | 1000 | `/employee/stream` 事件间隔(毫秒) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录，设置后按天滚动写文件 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时时间(毫秒) |
///
/// # 示例
///
/// ```ignore
/// DB_PATH=/var/lib/employee HTTP_PORT=9000 cargo run -p employee-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据库路径
    pub db_path: String,
    pub db_namespace: String,
    pub db_database: String,
    /// 流式接口的事件间隔 (毫秒)
    pub stream_interval_ms: u64,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| IN_MEMORY_DB.into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "employee".into()),
            db_database: std::env::var("DB_DATABASE").unwrap_or_else(|_| "employee".into()),
            stream_interval_ms: std::env::var("STREAM_INTERVAL_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(db_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.db_path = db_path.into();
        config.http_port = http_port;
        config
    }

    pub fn stream_interval(&self) -> Duration {
        Duration::from_millis(self.stream_interval_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path == IN_MEMORY_DB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides(IN_MEMORY_DB, 9123);
        assert!(config.is_in_memory());
        assert_eq!(config.http_port, 9123);
        assert!(config.bind_addr().ends_with(":9123"));
    }

    #[test]
    fn test_durations() {
        let mut config = Config::with_overrides("/tmp/employee-db", 0);
        assert!(!config.is_in_memory());

        config.stream_interval_ms = 1000;
        config.shutdown_timeout_ms = 250;
        assert_eq!(config.stream_interval(), Duration::from_secs(1));
        assert_eq!(config.shutdown_timeout(), Duration::from_millis(250));
    }
}
