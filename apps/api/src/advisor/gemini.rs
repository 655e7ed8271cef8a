use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::advisor::prompts::{DEPARTMENT_CONTEXT, LEARNING_PATH_CONTEXT};
use crate::advisor::{Advisor, DepartmentRecommendations, LearningPathSuggestion};
use crate::errors::AppError;
use crate::fixtures::models::{DepartmentSkillProfile, Employee, Job, LearningPath};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::skills::comparator::compute_gaps;

/// Advisor backed by the generative model.
pub struct GeminiAdvisor {
    llm: LlmClient,
}

impl GeminiAdvisor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Advisor for GeminiAdvisor {
    async fn learning_path(&self, employee: &Employee, job: &Job) -> Result<LearningPath, AppError> {
        let payload = learning_path_payload(employee, job)?;
        let context = format!("{LEARNING_PATH_CONTEXT}\n\n{JSON_ONLY_INSTRUCTION}");

        let suggestion: LearningPathSuggestion = self.llm.generate_json(&context, &payload).await?;
        info!(
            "Generated learning path for employee {} towards job {} ({} resources)",
            employee.id,
            job.id,
            suggestion.resources.len()
        );

        Ok(suggestion.into_learning_path(&employee.id))
    }

    async fn department_recommendations(
        &self,
        department: &str,
        profile: &DepartmentSkillProfile,
    ) -> Result<DepartmentRecommendations, AppError> {
        let payload = department_payload(department, profile)?;
        let context = format!("{DEPARTMENT_CONTEXT}\n\n{JSON_ONLY_INSTRUCTION}");

        Ok(self.llm.generate_json(&context, &payload).await?)
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}

/// The employee, the target job and the computed gaps, as one JSON document.
fn learning_path_payload(employee: &Employee, job: &Job) -> Result<String, AppError> {
    let gaps = compute_gaps(&employee.current_skills(), &job.requirements())?;

    let payload = json!({
        "employee": {
            "current_skills": employee.skills,
            "position": employee.position,
            "department": employee.department,
        },
        "target_job": {
            "title": job.title,
            "required_skills": job.required_skills,
            "department": job.department,
        },
        "skill_gaps": gaps,
    });
    Ok(payload.to_string())
}

fn department_payload(
    department: &str,
    profile: &DepartmentSkillProfile,
) -> Result<String, AppError> {
    let gaps = compute_gaps(&profile.current_skills, &profile.requirements())?;

    let payload = json!({
        "department": department,
        "current_skills": profile.current_skills,
        "required_skills": profile.required_skills,
        "skill_gaps": gaps,
    });
    Ok(payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::store::FixtureStore;

    #[test]
    fn test_learning_path_payload_includes_gaps() {
        let store = FixtureStore::builtin().unwrap();
        let payload = learning_path_payload(store.employee("1").unwrap(), store.job("1").unwrap())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(value["employee"]["position"], "Senior Developer");
        assert_eq!(value["target_job"]["title"], "Full Stack Developer");
        let gaps = value["skill_gaps"].as_array().unwrap();
        assert_eq!(gaps.len(), 5);
        assert_eq!(gaps[3]["name"], "MongoDB");
        assert_eq!(gaps[3]["gap"], 2.0);
    }

    #[test]
    fn test_department_payload() {
        let store = FixtureStore::builtin().unwrap();
        let profile = store.department_profile("Design").unwrap();
        let payload = department_payload("Design", profile).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(value["department"], "Design");
        assert_eq!(value["required_skills"].as_array().unwrap().len(), 5);
        assert_eq!(value["skill_gaps"][4]["name"], "Accessibility");
    }
}
