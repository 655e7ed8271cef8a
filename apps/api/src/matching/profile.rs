use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::AppError;
use crate::fixtures::models::{Employee, EmployeeSkill, LearningPath, SkillCategory};
use crate::fixtures::store::FixtureStore;
use crate::matching::{rank_jobs, JobMatch};

/// Everything the profile page shows for one employee.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeProfile {
    pub employee: Employee,
    pub skills_by_category: BTreeMap<SkillCategory, Vec<EmployeeSkill>>,
    pub job_matches: Vec<JobMatch>,
    pub learning_path: Option<LearningPath>,
}

pub fn employee_profile(
    store: &FixtureStore,
    employee_id: &str,
    include_weighted: bool,
) -> Result<EmployeeProfile, AppError> {
    let employee = store
        .employee(employee_id)
        .ok_or_else(|| AppError::NotFound(format!("Employee {employee_id} not found")))?;

    let mut skills_by_category: BTreeMap<SkillCategory, Vec<EmployeeSkill>> = BTreeMap::new();
    for skill in &employee.skills {
        skills_by_category
            .entry(skill.category)
            .or_default()
            .push(skill.clone());
    }

    Ok(EmployeeProfile {
        employee: employee.clone(),
        skills_by_category,
        job_matches: rank_jobs(store, employee_id, include_weighted)?,
        learning_path: store.learning_path_for(employee_id).cloned(),
    })
}
