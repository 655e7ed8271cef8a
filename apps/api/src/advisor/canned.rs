use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::advisor::{Advisor, DepartmentRecommendations, LearningPathSuggestion};
use crate::errors::AppError;
use crate::fixtures::models::{DepartmentSkillProfile, Employee, Job, LearningPath};

const BUILTIN_ADVICE: &str = include_str!("../../fixtures/canned_advice.json");
const DEFAULT_PATH_KEY: &str = "default";
const FALLBACK_DEPARTMENT: &str = "Engineering";

#[derive(Debug, Deserialize)]
struct CannedAdvice {
    /// Keyed by "<employee id>-<job id>", plus "default".
    learning_paths: HashMap<String, LearningPathSuggestion>,
    departments: HashMap<String, DepartmentRecommendations>,
}

/// Offline advisor answering from a fixed table.
#[derive(Debug)]
pub struct CannedAdvisor {
    advice: CannedAdvice,
}

impl CannedAdvisor {
    pub fn builtin() -> Result<Self> {
        let advice: CannedAdvice =
            serde_json::from_str(BUILTIN_ADVICE).context("Built-in canned advice is malformed")?;

        if !advice.learning_paths.contains_key(DEFAULT_PATH_KEY) {
            anyhow::bail!("Canned advice has no '{DEFAULT_PATH_KEY}' learning path");
        }
        if !advice.departments.contains_key(FALLBACK_DEPARTMENT) {
            anyhow::bail!("Canned advice has no '{FALLBACK_DEPARTMENT}' recommendations");
        }
        Ok(Self { advice })
    }

    fn suggestion_for(&self, employee_id: &str, job_id: &str) -> Option<&LearningPathSuggestion> {
        let key = format!("{employee_id}-{job_id}");
        self.advice
            .learning_paths
            .get(&key)
            .or_else(|| self.advice.learning_paths.get(DEFAULT_PATH_KEY))
    }
}

#[async_trait]
impl Advisor for CannedAdvisor {
    async fn learning_path(&self, employee: &Employee, job: &Job) -> Result<LearningPath, AppError> {
        let suggestion = self
            .suggestion_for(&employee.id, &job.id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No canned learning path available"))?;

        Ok(suggestion.into_learning_path(&employee.id))
    }

    async fn department_recommendations(
        &self,
        department: &str,
        _profile: &DepartmentSkillProfile,
    ) -> Result<DepartmentRecommendations, AppError> {
        self.advice
            .departments
            .get(department)
            .or_else(|| self.advice.departments.get(FALLBACK_DEPARTMENT))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No canned recommendations available").into())
    }

    fn backend(&self) -> &'static str {
        "canned"
    }
}
