//! Axum route handlers for the Learning Paths API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::fixtures::models::{LearningPath, LearningResource};
use crate::learning::{
    filter_learning_paths, filter_resources, top_resources, ResourceUsage, DEFAULT_TOP_RESOURCES,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct LearningPathQuery {
    pub employee_id: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    pub skill: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopResourcesQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratePathRequest {
    pub employee_id: String,
    pub job_id: String,
}

#[derive(Debug, Serialize)]
pub struct LearningPathListResponse {
    pub learning_paths: Vec<LearningPath>,
    /// Ids of employees that have at least one path, unfiltered.
    pub employees_with_paths: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    pub resources: Vec<LearningResource>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct TopResourcesResponse {
    pub resources: Vec<ResourceUsage>,
}

#[derive(Debug, Serialize)]
pub struct GeneratePathResponse {
    pub learning_path: LearningPath,
    pub advisor_backend: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/learning-paths?employee_id=&search=
pub async fn handle_list_learning_paths(
    State(state): State<AppState>,
    Query(query): Query<LearningPathQuery>,
) -> Json<LearningPathListResponse> {
    let paths = state.fixtures.learning_paths();
    let learning_paths = filter_learning_paths(
        paths,
        query.employee_id.as_deref(),
        query.search.as_deref(),
    )
    .into_iter()
    .cloned()
    .collect();

    let mut employees_with_paths: Vec<String> =
        paths.iter().map(|p| p.employee_id.clone()).collect();
    employees_with_paths.sort();
    employees_with_paths.dedup();

    Json(LearningPathListResponse {
        learning_paths,
        employees_with_paths,
    })
}

/// GET /api/v1/learning-resources?skill=&search=
pub async fn handle_list_learning_resources(
    State(state): State<AppState>,
    Query(query): Query<ResourceQuery>,
) -> Json<ResourceListResponse> {
    let resources: Vec<LearningResource> = filter_resources(
        state.fixtures.learning_resources(),
        query.skill.as_deref(),
        query.search.as_deref(),
    )
    .into_iter()
    .cloned()
    .collect();

    Json(ResourceListResponse {
        total: resources.len(),
        resources,
    })
}

/// GET /api/v1/learning-paths/top-resources?limit=
pub async fn handle_top_resources(
    State(state): State<AppState>,
    Query(query): Query<TopResourcesQuery>,
) -> Json<TopResourcesResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_RESOURCES);
    Json(TopResourcesResponse {
        resources: top_resources(state.fixtures.learning_paths(), limit),
    })
}

/// POST /api/v1/learning-paths/generate
///
/// Generates a learning path for an employee towards a target job through
/// the configured advisor. The result is returned, not stored.
pub async fn handle_generate_learning_path(
    State(state): State<AppState>,
    Json(request): Json<GeneratePathRequest>,
) -> Result<Json<GeneratePathResponse>, AppError> {
    let employee = state.fixtures.employee(&request.employee_id).ok_or_else(|| {
        AppError::NotFound(format!("Employee {} not found", request.employee_id))
    })?;
    let job = state
        .fixtures
        .job(&request.job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let learning_path = state.advisor.learning_path(employee, job).await?;
    info!(
        "Learning path {} generated for employee {} via {} advisor",
        learning_path.id,
        employee.id,
        state.advisor.backend()
    );

    Ok(Json(GeneratePathResponse {
        learning_path,
        advisor_backend: state.advisor.backend(),
    }))
}
