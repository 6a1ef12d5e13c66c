//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeData};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees, in the order the store returns them
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT record::id(id) AS id, name, salary FROM employee")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        if id.is_empty() {
            return Ok(None);
        }
        let mut result = self
            .base
            .db()
            .query("SELECT record::id(id) AS id, name, salary FROM type::thing('employee', $id)")
            .bind(("id", id.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Find employees with `min <= salary <= max`
    pub async fn find_by_salary_range(&self, min: i64, max: i64) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS id, name, salary FROM employee \
                 WHERE salary >= $min AND salary <= $max",
            )
            .bind(("min", min))
            .bind(("max", max))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Create a new employee, the store assigns the id
    pub async fn create(&self, data: EmployeeData) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query(
                "CREATE employee CONTENT $data \
                 RETURN record::id(id) AS id, name, salary",
            )
            .bind(("data", data))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::EmptyWrite("create employee".to_string()))
    }

    /// Create or overwrite the employee stored under `id`
    ///
    /// `id` is used verbatim as the record key and must not be empty.
    pub async fn upsert(&self, id: &str, data: EmployeeData) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query(
                "UPSERT type::thing('employee', $id) CONTENT $data \
                 RETURN record::id(id) AS id, name, salary",
            )
            .bind(("id", id.to_string()))
            .bind(("data", data))
            .await?;

        let saved: Option<Employee> = result.take(0)?;
        saved.ok_or_else(|| RepoError::EmptyWrite(format!("upsert employee {:?}", id)))
    }

    /// Overwrite the fields of an existing employee
    ///
    /// Returns `None` when no record has this id; nothing is inserted.
    pub async fn update(&self, id: &str, data: EmployeeData) -> RepoResult<Option<Employee>> {
        if id.is_empty() {
            return Ok(None);
        }
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE type::thing('employee', $id) CONTENT $data \
                 RETURN record::id(id) AS id, name, salary",
            )
            .bind(("id", id.to_string()))
            .bind(("data", data))
            .await?;

        let updated: Vec<Employee> = result.take(0)?;
        Ok(updated.into_iter().next())
    }

    /// Hard delete an employee. Deleting a missing id is not an error.
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        if id.is_empty() {
            return Ok(());
        }
        self.base
            .db()
            .query("DELETE type::thing('employee', $id)")
            .bind(("id", id.to_string()))
            .await?
            .check()?;
        Ok(())
    }
}
