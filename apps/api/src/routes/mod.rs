pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::fixtures::handlers as directory;
use crate::learning::handlers as learning;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/dashboard", get(analysis::handle_dashboard))
        // Directory
        .route("/api/v1/employees", get(directory::handle_list_employees))
        .route("/api/v1/employees/:id", get(matching::handle_get_employee))
        .route("/api/v1/departments", get(directory::handle_list_departments))
        .route("/api/v1/jobs", get(directory::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(directory::handle_get_job))
        // Matching
        .route(
            "/api/v1/jobs/:id/candidates",
            get(matching::handle_job_candidates),
        )
        .route("/api/v1/matches", get(matching::handle_list_matches))
        .route("/api/v1/skills/compare", post(matching::handle_compare))
        // Skill gaps
        .route(
            "/api/v1/skill-gaps/:department",
            get(analysis::handle_department_gaps),
        )
        .route(
            "/api/v1/skill-gaps/:department/recommendations",
            post(analysis::handle_department_recommendations),
        )
        // Learning paths
        .route(
            "/api/v1/learning-paths",
            get(learning::handle_list_learning_paths),
        )
        .route(
            "/api/v1/learning-paths/top-resources",
            get(learning::handle_top_resources),
        )
        .route(
            "/api/v1/learning-paths/generate",
            post(learning::handle_generate_learning_path),
        )
        .route(
            "/api/v1/learning-resources",
            get(learning::handle_list_learning_resources),
        )
        // Resumes
        .route(
            "/api/v1/resumes/analyze",
            post(resume::handle_analyze_resume),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::state::test_state;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_and_dashboard() {
        let app = build_router(test_state());

        let (status, body) = send(app.clone(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = send(app, get_request("/api/v1/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["top_skill_gaps"][0]["skill"], "AWS");
        assert_eq!(body["critical_gap_count"], 3);
    }

    #[tokio::test]
    async fn test_employee_search_and_profile() {
        let app = build_router(test_state());

        let (status, body) = send(
            app.clone(),
            get_request("/api/v1/employees?search=figma&department="),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["employees"][0]["id"], "2");

        let (status, body) = send(app.clone(), get_request("/api/v1/employees/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job_matches"][0]["job_id"], "4");

        let (status, body) = send(app, get_request("/api/v1/employees/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_compare_validation_error_shape() {
        let app = build_router(test_state());
        let (status, body) = send(
            app,
            post_json(
                "/api/v1/skills/compare",
                json!({
                    "current_skills": [{"name": "SQL", "level": -1}],
                    "required_skills": [{"name": "SQL", "minimum_level": 3}]
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_matches_respect_weighted_flag() {
        let mut state = test_state();
        state.config.enable_weighted_scoring = false;
        let app = build_router(state);

        let (status, body) = send(app, get_request("/api/v1/matches?job_id=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 5);
        assert!(body["matches"][0].get("weighted_score").is_none());
    }

    #[tokio::test]
    async fn test_department_routes() {
        let app = build_router(test_state());

        let (status, body) = send(app.clone(), get_request("/api/v1/skill-gaps/Engineering")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["critical_count"], 1);

        let (status, _) = send(app.clone(), get_request("/api/v1/skill-gaps/Legal")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            app,
            Request::builder()
                .method("POST")
                .uri("/api/v1/skill-gaps/Design/recommendations")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["advisor_backend"], "canned");
    }

    #[tokio::test]
    async fn test_learning_path_routes() {
        let app = build_router(test_state());

        let (status, body) = send(
            app.clone(),
            get_request("/api/v1/learning-paths/top-resources?limit=1"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resources"].as_array().unwrap().len(), 1);

        let (status, body) = send(
            app.clone(),
            get_request("/api/v1/learning-resources?search=udemy"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["resources"][0]["id"], "4");

        let (status, body) = send(
            app,
            post_json(
                "/api/v1/learning-paths/generate",
                json!({"employee_id": "2", "job_id": "2"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["learning_path"]["priority"], "High");
    }

    #[tokio::test]
    async fn test_resume_upload() {
        let app = build_router(test_state());
        let boundary = "X-RESUME-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"cv.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             Product Strategy, Agile Methodology, Market Research, Leadership and Data Analysis\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["file_name"], "cv.txt");
        assert_eq!(body["matches"][0]["job_id"], "4");
        assert_eq!(body["matches"][0]["score"], 100);
    }

    #[tokio::test]
    async fn test_resume_upload_without_file_field() {
        let app = build_router(test_state());
        let boundary = "X-RESUME-BOUNDARY";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"notes\"\r\n\r\n\
             hello\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
