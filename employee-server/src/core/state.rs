use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::EmployeeRepository;
use crate::services::EmployeeService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 启动时显式构造并注入到路由中，克隆成本极低 (内部均为 Arc)。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | db | DbService | 嵌入式数据库 (健康检查) |
/// | employees | EmployeeService | 员工服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 嵌入式数据库 (SurrealDB)
    pub db: DbService,
    /// 员工服务
    pub employees: EmployeeService,
}

impl ServerState {
    /// 在已打开的数据库上装配服务
    pub fn new(config: &Config, db: DbService) -> Self {
        let employees = EmployeeService::new(
            EmployeeRepository::new(db.db.clone()),
            config.stream_interval(),
        );
        Self { db, employees }
    }

    /// 打开数据库并装配所有服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(config).await?;
        Ok(Self::new(config, db))
    }
}
