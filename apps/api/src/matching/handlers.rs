//! Axum route handlers for matching, employee profiles and the raw comparator.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::profile::{employee_profile, EmployeeProfile};
use crate::matching::{all_matches, filter_matches, rank_candidates, JobMatch, MatchFilter};
use crate::skills::comparator::{compare, Comparison};
use crate::skills::models::{Requirement, Skill};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<JobMatch>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CandidatesResponse {
    pub job_id: String,
    pub candidates: Vec<JobMatch>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub current_skills: Vec<Skill>,
    pub required_skills: Vec<Requirement>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/matches?job_id=&employee_id=&search=
pub async fn handle_list_matches(
    State(state): State<AppState>,
    Query(filter): Query<MatchFilter>,
) -> Result<Json<MatchListResponse>, AppError> {
    let matches = all_matches(&state.fixtures, state.config.enable_weighted_scoring)?;
    let matches = filter_matches(&state.fixtures, matches, &filter);

    Ok(Json(MatchListResponse {
        total: matches.len(),
        matches,
    }))
}

/// GET /api/v1/jobs/:id/candidates
pub async fn handle_job_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<CandidatesResponse>, AppError> {
    let candidates =
        rank_candidates(&state.fixtures, &job_id, state.config.enable_weighted_scoring)?;

    Ok(Json(CandidatesResponse { job_id, candidates }))
}

/// GET /api/v1/employees/:id
pub async fn handle_get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeProfile>, AppError> {
    let profile = employee_profile(&state.fixtures, &id, state.config.enable_weighted_scoring)?;
    Ok(Json(profile))
}

/// POST /api/v1/skills/compare
///
/// Runs the comparator on caller-supplied skills. Malformed levels or names
/// come back as 400 VALIDATION_ERROR.
pub async fn handle_compare(
    Json(request): Json<CompareRequest>,
) -> Result<Json<Comparison>, AppError> {
    let comparison = compare(&request.current_skills, &request.required_skills)?;
    Ok(Json(comparison))
}
