//! Axum route handlers for the directory endpoints (employees, jobs, departments).

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::fixtures::models::{Employee, Job};
use crate::fixtures::{contains_term, search_term};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EmployeeQuery {
    pub search: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobQuery {
    pub search: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct DepartmentListResponse {
    pub departments: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total: usize,
}

/// GET /api/v1/employees?search=&department=
pub async fn handle_list_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Json<EmployeeListResponse> {
    let employees: Vec<Employee> = state
        .fixtures
        .search_employees(query.search.as_deref(), query.department.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Json(EmployeeListResponse {
        total: employees.len(),
        employees,
    })
}

/// GET /api/v1/departments
pub async fn handle_list_departments(State(state): State<AppState>) -> Json<DepartmentListResponse> {
    Json(DepartmentListResponse {
        departments: state.fixtures.departments(),
    })
}

/// GET /api/v1/jobs?search=&department=
///
/// `search` matches the title or the department.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Json<JobListResponse> {
    let term = search_term(query.search.as_deref());
    let department = query
        .department
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    let jobs: Vec<Job> = state
        .fixtures
        .jobs()
        .iter()
        .filter(|j| department.map_or(true, |d| j.department == d))
        .filter(|j| match &term {
            None => true,
            Some(t) => contains_term(&j.title, t) || contains_term(&j.department, t),
        })
        .cloned()
        .collect();

    Json(JobListResponse {
        total: jobs.len(),
        jobs,
    })
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state
        .fixtures
        .job(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
