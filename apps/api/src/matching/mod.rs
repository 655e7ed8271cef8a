//! Job Matching — employee × job match scores and rankings.
//!
//! Every score comes from `skills::comparator`. The fixed mock score table of
//! the old dashboard is gone; matches are recomputed from skills on demand.

pub mod handlers;
pub mod profile;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::fixtures::models::{Employee, Job};
use crate::fixtures::store::FixtureStore;
use crate::fixtures::{compare_ids, contains_term, search_term};
use crate::skills::comparator::{compute_match_score, compute_weighted_score};
use crate::skills::validation::ValidationError;

/// One employee scored against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub employee_id: String,
    pub job_id: String,
    pub score: u32,
    /// Present only when weighted scoring is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted_score: Option<u32>,
    pub matched_count: usize,
    pub missing_skills: Vec<String>,
}

/// Optional filters for the match listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchFilter {
    pub job_id: Option<String>,
    pub employee_id: Option<String>,
    /// Matches job title or employee name.
    pub search: Option<String>,
}

pub fn match_employee_to_job(
    employee: &Employee,
    job: &Job,
    include_weighted: bool,
) -> Result<JobMatch, ValidationError> {
    let skills = employee.current_skills();
    let requirements = job.requirements();

    let match_score = compute_match_score(&skills, &requirements)?;
    let weighted_score = if include_weighted {
        Some(compute_weighted_score(&skills, &requirements)?)
    } else {
        None
    };

    Ok(JobMatch {
        employee_id: employee.id.clone(),
        job_id: job.id.clone(),
        score: match_score.score,
        weighted_score,
        matched_count: match_score.matched_count,
        missing_skills: match_score.missing_skills,
    })
}

/// Every employee against every job, best first.
pub fn all_matches(
    store: &FixtureStore,
    include_weighted: bool,
) -> Result<Vec<JobMatch>, ValidationError> {
    let mut matches = Vec::with_capacity(store.employees().len() * store.jobs().len());
    for job in store.jobs() {
        for employee in store.employees() {
            matches.push(match_employee_to_job(employee, job, include_weighted)?);
        }
    }
    sort_matches(&mut matches);
    Ok(matches)
}

pub fn filter_matches(
    store: &FixtureStore,
    matches: Vec<JobMatch>,
    filter: &MatchFilter,
) -> Vec<JobMatch> {
    let term = search_term(filter.search.as_deref());
    let job_id = filter.job_id.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let employee_id = filter
        .employee_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    matches
        .into_iter()
        .filter(|m| job_id.map_or(true, |id| m.job_id == id))
        .filter(|m| employee_id.map_or(true, |id| m.employee_id == id))
        .filter(|m| match &term {
            None => true,
            Some(t) => {
                store
                    .job(&m.job_id)
                    .is_some_and(|job| contains_term(&job.title, t))
                    || store
                        .employee(&m.employee_id)
                        .is_some_and(|e| contains_term(&e.name, t))
            }
        })
        .collect()
}

/// Employees ranked for one job.
pub fn rank_candidates(
    store: &FixtureStore,
    job_id: &str,
    include_weighted: bool,
) -> Result<Vec<JobMatch>, AppError> {
    let job = store
        .job(job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let mut matches = store
        .employees()
        .iter()
        .map(|e| match_employee_to_job(e, job, include_weighted))
        .collect::<Result<Vec<_>, _>>()?;
    sort_matches(&mut matches);
    Ok(matches)
}

/// Jobs ranked for one employee.
pub fn rank_jobs(
    store: &FixtureStore,
    employee_id: &str,
    include_weighted: bool,
) -> Result<Vec<JobMatch>, AppError> {
    let employee = store
        .employee(employee_id)
        .ok_or_else(|| AppError::NotFound(format!("Employee {employee_id} not found")))?;

    let mut matches = store
        .jobs()
        .iter()
        .map(|j| match_employee_to_job(employee, j, include_weighted))
        .collect::<Result<Vec<_>, _>>()?;
    sort_matches(&mut matches);
    Ok(matches)
}

/// Score desc, then weighted score desc, then employee id, then job id.
fn sort_matches(matches: &mut [JobMatch]) {
    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.weighted_score.cmp(&a.weighted_score))
            .then_with(|| compare_ids(&a.employee_id, &b.employee_id))
            .then_with(|| compare_ids(&a.job_id, &b.job_id))
    });
}
