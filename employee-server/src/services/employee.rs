//! Employee Service
//!
//! Converts between the transfer shape ([`shared::models::Employee`]) and the
//! storage entity, and forwards each operation to [`EmployeeRepository`] as a
//! single store call. No retries; store failures surface unchanged as
//! [`AppError`](crate::utils::AppError).

use std::time::Duration;

use futures::StreamExt;
use futures::stream::{self, BoxStream};
use shared::models::{Employee, SalaryRange};

use super::pacing::paced;
use crate::db::models as db;
use crate::db::repository::EmployeeRepository;
use crate::utils::AppResult;

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
    stream_interval: Duration,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository, stream_interval: Duration) -> Self {
        Self {
            repo,
            stream_interval,
        }
    }

    /// All employees as of the store's read
    pub async fn list_all(&self) -> AppResult<Vec<Employee>> {
        let employees = self.repo.find_all().await?;
        Ok(employees.into_iter().map(Employee::from).collect())
    }

    /// Live feed: every stored employee, one per `stream_interval`
    ///
    /// The snapshot is read up front, so a store failure is reported before
    /// the first element. Dropping the stream cancels the remaining timers.
    pub async fn stream_all(&self) -> AppResult<BoxStream<'static, Employee>> {
        let employees = self.list_all().await?;
        tracing::debug!(
            count = employees.len(),
            interval_ms = self.stream_interval.as_millis() as u64,
            "Streaming employees"
        );
        Ok(paced(stream::iter(employees), self.stream_interval).boxed())
    }

    /// `Ok(None)` when no employee has this id
    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<Employee>> {
        let employee = self.repo.find_by_id(id).await?;
        Ok(employee.map(Employee::from))
    }

    /// Employees whose salary lies in `[min, max]`; empty when `min > max`
    pub async fn get_by_salary_range(&self, range: SalaryRange) -> AppResult<Vec<Employee>> {
        let employees = self
            .repo
            .find_by_salary_range(range.min, range.max)
            .await?;
        Ok(employees.into_iter().map(Employee::from).collect())
    }

    /// Persist an employee
    ///
    /// Without an id (or with an empty one) the store assigns one; with an id
    /// the record stored under it is created or overwritten.
    pub async fn save(&self, employee: Employee) -> AppResult<Employee> {
        let (id, data) = db::Employee::from(employee).into_parts();
        let saved = match id.filter(|id| !id.is_empty()) {
            Some(id) => self.repo.upsert(&id, data).await?,
            None => self.repo.create(data).await?,
        };
        tracing::info!(id = ?saved.id, "Employee saved");
        Ok(saved.into())
    }

    /// Overwrite the fields of the employee stored under `id`
    ///
    /// Any `id` in the body is ignored. `Ok(None)` when `id` does not exist.
    pub async fn update(&self, id: &str, employee: Employee) -> AppResult<Option<Employee>> {
        let (_, data) = db::Employee::from(employee).into_parts();
        let updated = self.repo.update(id, data).await?;
        if updated.is_none() {
            tracing::debug!(id = %id, "Update target not found");
        }
        Ok(updated.map(Employee::from))
    }

    /// Delete by id; missing ids complete without error
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(id = %id, "Employee deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::config::IN_MEMORY_DB;
    use crate::db::DbService;
    use std::time::Instant;

    async fn service(interval: Duration) -> EmployeeService {
        let config = Config::with_overrides(IN_MEMORY_DB, 0);
        let db = DbService::new(&config).await.unwrap();
        EmployeeService::new(EmployeeRepository::new(db.db), interval)
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let svc = service(Duration::ZERO).await;
        let saved = svc.save(Employee::new("Alice", 50000)).await.unwrap();
        let id = saved.id.clone().unwrap();

        let found = svc.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name.as_deref(), Some("Alice"));
        assert_eq!(found.salary, Some(50000));
        assert_eq!(found.id.as_deref(), Some(id.as_str()));
    }

    #[tokio::test]
    async fn test_save_with_id_upserts() {
        let svc = service(Duration::ZERO).await;
        svc.save(Employee::new("Alice", 50000).with_id("1"))
            .await
            .unwrap();
        let saved = svc
            .save(Employee::new("Alice B.", 51000).with_id("1"))
            .await
            .unwrap();

        assert_eq!(saved.id.as_deref(), Some("1"));
        let all = svc.list_all().await.unwrap();
        assert_eq!(all, vec![Employee::new("Alice B.", 51000).with_id("1")]);
    }

    #[tokio::test]
    async fn test_update_keeps_path_id() {
        let svc = service(Duration::ZERO).await;
        let saved = svc.save(Employee::new("Bob", 90000)).await.unwrap();
        let id = saved.id.unwrap();

        let body = Employee::new("Robert", 95000).with_id("someone-else");
        let updated = svc.update(&id, body).await.unwrap().unwrap();
        assert_eq!(updated.id.as_deref(), Some(id.as_str()));
        assert_eq!(updated.name.as_deref(), Some("Robert"));

        assert_eq!(svc.get_by_id("someone-else").await.unwrap(), None);
        assert_eq!(svc.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let svc = service(Duration::ZERO).await;
        let updated = svc.update("ghost", Employee::new("X", 1)).await.unwrap();
        assert_eq!(updated, None);
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_id_is_empty_not_error() {
        let svc = service(Duration::ZERO).await;
        assert_eq!(svc.get_by_id("nope").await.unwrap(), None);
        svc.delete("nope").await.unwrap();
    }

    #[tokio::test]
    async fn test_save_with_empty_id_creates() {
        let svc = service(Duration::ZERO).await;
        let saved = svc
            .save(Employee::new("Carol", 70000).with_id(""))
            .await
            .unwrap();

        let id = saved.id.unwrap();
        assert!(!id.is_empty());
        assert_eq!(svc.get_by_id(&id).await.unwrap().unwrap().salary, Some(70000));
    }

    #[tokio::test]
    async fn test_blank_id_is_just_absent() {
        let svc = service(Duration::ZERO).await;
        assert_eq!(svc.get_by_id(" ").await.unwrap(), None);
        assert_eq!(svc.get_by_id("").await.unwrap(), None);
        svc.delete(" ").await.unwrap();
    }

    #[tokio::test]
    async fn test_salary_range() {
        let svc = service(Duration::ZERO).await;
        svc.save(Employee::new("Alice", 50000).with_id("1"))
            .await
            .unwrap();
        svc.save(Employee::new("Bob", 90000).with_id("2"))
            .await
            .unwrap();

        let found = svc
            .get_by_salary_range(SalaryRange {
                min: 60000,
                max: 100000,
            })
            .await
            .unwrap();
        assert_eq!(found, vec![Employee::new("Bob", 90000).with_id("2")]);

        let none = svc
            .get_by_salary_range(SalaryRange {
                min: 100000,
                max: 60000,
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_stream_emits_every_employee_paced() {
        let svc = service(Duration::from_millis(200)).await;
        for i in 0..3 {
            svc.save(Employee::new(format!("E{i}"), 1000 * i))
                .await
                .unwrap();
        }

        let start = Instant::now();
        let mut feed = svc.stream_all().await.unwrap();
        let mut stamps = Vec::new();
        while let Some(employee) = feed.next().await {
            assert!(employee.id.is_some());
            stamps.push(Instant::now());
        }

        assert_eq!(stamps.len(), 3);
        let mut previous = start;
        for stamp in stamps {
            assert!(stamp.duration_since(previous) >= Duration::from_millis(200));
            previous = stamp;
        }
    }
}
