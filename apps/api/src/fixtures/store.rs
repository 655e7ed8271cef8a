use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::fixtures::models::{
    DashboardSeed, DepartmentSkillProfile, Employee, Job, LearningPath, LearningResource,
    SeedData, SkillCluster,
};
use crate::fixtures::{contains_term, search_term};
use crate::skills::validation::{validate_requirements, validate_skills};

/// Built-in dashboard fixtures, embedded at compile time.
const BUILTIN_SEED: &str = include_str!("../../fixtures/seed.json");

/// Read-only, in-memory store of every fixture record.
/// Shared across handlers as `Arc<FixtureStore>`; never mutated after load.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    data: SeedData,
}

impl FixtureStore {
    /// Loads from `path` when given, else the built-in seed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SEED).context("Built-in seed data is malformed")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        info!("Loading fixtures from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture file '{}'", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Fixture file '{}' is malformed", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let data: SeedData = serde_json::from_str(raw).context("Invalid fixture JSON")?;
        let store = Self { data };
        store.validate()?;
        Ok(store)
    }

    /// Every level in the fixtures must pass comparator validation, so that
    /// request-time comparisons over fixtures cannot fail.
    fn validate(&self) -> Result<()> {
        for employee in &self.data.employees {
            validate_skills(&employee.current_skills())
                .with_context(|| format!("Employee {} has invalid skills", employee.id))?;
        }
        for job in &self.data.jobs {
            validate_requirements(&job.requirements())
                .with_context(|| format!("Job {} has invalid requirements", job.id))?;
        }
        for (name, profile) in &self.data.departments {
            validate_skills(&profile.current_skills)
                .with_context(|| format!("Department {name} has invalid current skills"))?;
            validate_requirements(&profile.requirements())
                .with_context(|| format!("Department {name} has invalid required skills"))?;
        }
        Ok(())
    }

    pub fn employees(&self) -> &[Employee] {
        &self.data.employees
    }

    pub fn jobs(&self) -> &[Job] {
        &self.data.jobs
    }

    pub fn learning_resources(&self) -> &[LearningResource] {
        &self.data.learning_resources
    }

    pub fn learning_paths(&self) -> &[LearningPath] {
        &self.data.learning_paths
    }

    pub fn skill_clusters(&self) -> &[SkillCluster] {
        &self.data.skill_clusters
    }

    pub fn dashboard(&self) -> &DashboardSeed {
        &self.data.dashboard
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.data.employees.iter().find(|e| e.id == id)
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.data.jobs.iter().find(|j| j.id == id)
    }

    pub fn learning_path_for(&self, employee_id: &str) -> Option<&LearningPath> {
        self.data
            .learning_paths
            .iter()
            .find(|p| p.employee_id == employee_id)
    }

    /// Distinct employee departments, sorted.
    pub fn departments(&self) -> Vec<String> {
        self.data
            .employees
            .iter()
            .map(|e| e.department.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Department skill profiles in name order.
    pub fn department_profiles(&self) -> impl Iterator<Item = (&String, &DepartmentSkillProfile)> {
        self.data.departments.iter()
    }

    pub fn department_profile(&self, name: &str) -> Option<&DepartmentSkillProfile> {
        self.data.departments.get(name)
    }

    /// Employee directory search.
    ///
    /// `term` matches name, position or any skill name (case-insensitive).
    /// `department` is an exact filter; blank means all departments.
    pub fn search_employees(&self, term: Option<&str>, department: Option<&str>) -> Vec<&Employee> {
        let term = search_term(term);
        let department = department.map(str::trim).filter(|d| !d.is_empty());

        self.data
            .employees
            .iter()
            .filter(|e| department.map_or(true, |d| e.department == d))
            .filter(|e| match &term {
                None => true,
                Some(t) => {
                    contains_term(&e.name, t)
                        || contains_term(&e.position, t)
                        || e.skills.iter().any(|s| contains_term(&s.name, t))
                }
            })
            .collect()
    }
}
