//! Employee API Handlers

use std::convert::Infallible;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::{Stream, StreamExt};
use shared::models::{Employee, SalaryRange};

use crate::core::ServerState;
use crate::utils::AppResult;

/// Single value, or `200` with an empty body when absent
fn optional_json(employee: Option<Employee>) -> Response {
    match employee {
        Some(e) => Json(e).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.list_all().await?;
    Ok(Json(employees))
}

/// Server-sent feed, one employee per event
pub async fn stream(
    State(state): State<ServerState>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let feed = state.employees.stream_all().await?;
    let events = feed.filter_map(|employee| async move {
        match Event::default().json_data(&employee) {
            Ok(event) => Some(Ok(event)),
            Err(e) => {
                tracing::error!(error = %e, id = ?employee.id, "Failed to encode employee event");
                None
            }
        }
    });
    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let employee = state.employees.get_by_id(&id).await?;
    Ok(optional_json(employee))
}

/// Employees with salary in `[min, max]`
pub async fn salary_range(
    State(state): State<ServerState>,
    Query(range): Query<SalaryRange>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.get_by_salary_range(range).await?;
    Ok(Json(employees))
}

/// Save an employee
pub async fn save(
    State(state): State<ServerState>,
    Json(payload): Json<Employee>,
) -> AppResult<Json<Employee>> {
    let employee = state.employees.save(payload).await?;
    Ok(Json(employee))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Employee>,
) -> AppResult<Response> {
    let employee = state.employees.update(&id, payload).await?;
    Ok(optional_json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.employees.delete(&id).await?;
    Ok(StatusCode::OK)
}
