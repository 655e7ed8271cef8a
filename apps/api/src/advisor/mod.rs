//! Advisor — pluggable backend for learning paths and department recommendations.
//!
//! `GeminiAdvisor` asks the generative model; `CannedAdvisor` answers from a
//! fixed table and is used whenever no API key is configured.
//!
//! `AppState` holds an `Arc<dyn Advisor>`, chosen once at startup.

pub mod canned;
pub mod gemini;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::fixtures::models::{
    DepartmentSkillProfile, Employee, Job, LearningPath, LearningResource, Priority,
    ResourceLevel, ResourceType,
};

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across advisor backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRecommendations {
    pub critical_gaps: Vec<String>,
    pub emerging_skills: Vec<String>,
    pub redundancies: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A learning resource as proposed by an advisor, before ids are assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedResource {
    pub title: String,
    pub provider: String,
    pub skills_addressed: Vec<String>,
    pub level: ResourceLevel,
    pub duration: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

/// The advisor's answer for one employee and target job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathSuggestion {
    pub target_skills: Vec<String>,
    pub estimated_time: String,
    pub priority: Priority,
    pub resources: Vec<SuggestedResource>,
}

impl LearningPathSuggestion {
    /// Assigns fresh ids to the path and to each resource.
    pub fn into_learning_path(self, employee_id: &str) -> LearningPath {
        LearningPath {
            id: Uuid::new_v4().to_string(),
            employee_id: employee_id.to_string(),
            target_skills: self.target_skills,
            resources: self
                .resources
                .into_iter()
                .map(|r| LearningResource {
                    id: Uuid::new_v4().to_string(),
                    title: r.title,
                    provider: r.provider,
                    skills_addressed: r.skills_addressed,
                    level: r.level,
                    duration: r.duration,
                    url: r.url,
                    resource_type: r.resource_type,
                })
                .collect(),
            estimated_completion_time: self.estimated_time,
            priority: self.priority,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Advisor: Send + Sync {
    async fn learning_path(&self, employee: &Employee, job: &Job) -> Result<LearningPath, AppError>;

    async fn department_recommendations(
        &self,
        department: &str,
        profile: &DepartmentSkillProfile,
    ) -> Result<DepartmentRecommendations, AppError>;

    /// "gemini" | "canned", reported back to callers.
    fn backend(&self) -> &'static str;
}
