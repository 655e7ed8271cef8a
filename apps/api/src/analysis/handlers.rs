//! Axum route handlers for the dashboard and department skill-gap analysis.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::advisor::DepartmentRecommendations;
use crate::analysis::dashboard::{dashboard_summary, DashboardSummary};
use crate::analysis::department::{analyze_department, DepartmentAnalysis};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub department: String,
    pub recommendations: DepartmentRecommendations,
    pub advisor_backend: &'static str,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    Ok(Json(dashboard_summary(&state.fixtures)?))
}

/// GET /api/v1/skill-gaps/:department
pub async fn handle_department_gaps(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<DepartmentAnalysis>, AppError> {
    Ok(Json(analyze_department(&state.fixtures, &department)?))
}

/// POST /api/v1/skill-gaps/:department/recommendations
///
/// Asks the configured advisor for recommendations on a department that has
/// a skill profile.
pub async fn handle_department_recommendations(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = state.fixtures.department_profile(&department).ok_or_else(|| {
        AppError::NotFound(format!("No skill profile for department {department}"))
    })?;

    let recommendations = state
        .advisor
        .department_recommendations(&department, profile)
        .await?;
    info!(
        "Department recommendations for {department} via {} advisor",
        state.advisor.backend()
    );

    Ok(Json(RecommendationsResponse {
        department,
        recommendations,
        advisor_backend: state.advisor.backend(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[tokio::test]
    async fn test_recommendations_for_profiled_department() {
        let Json(body) =
            handle_department_recommendations(State(test_state()), Path("Analytics".to_string()))
                .await
                .unwrap();
        assert_eq!(body.advisor_backend, "canned");
        assert_eq!(
            body.recommendations.critical_gaps[0],
            "Machine Learning Operations"
        );
    }

    #[tokio::test]
    async fn test_recommendations_need_a_profile() {
        let err =
            handle_department_recommendations(State(test_state()), Path("Product".to_string()))
                .await
                .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
