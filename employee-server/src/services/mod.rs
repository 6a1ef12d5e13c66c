//! Service layer

pub mod employee;
pub mod pacing;

pub use employee::EmployeeService;
