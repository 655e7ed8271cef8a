use serde::Serialize;

use crate::analysis::round_tenths;
use crate::errors::AppError;
use crate::fixtures::store::FixtureStore;
use crate::skills::comparator::{compute_gaps, sort_by_gap_desc};
use crate::skills::models::SkillGap;

/// Gaps above this count as critical in the department view.
pub const CRITICAL_GAP: f64 = 1.0;

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentAnalysis {
    pub department: String,
    /// Largest gap first.
    pub gaps: Vec<SkillGap>,
    pub critical_count: usize,
    pub exceeding_count: usize,
    pub focus: String,
    pub critical_summary: String,
    pub exceeding_summary: String,
    pub recruiting_advice: String,
}

pub fn analyze_department(
    store: &FixtureStore,
    department: &str,
) -> Result<DepartmentAnalysis, AppError> {
    let profile = store.department_profile(department).ok_or_else(|| {
        AppError::NotFound(format!("No skill profile for department {department}"))
    })?;

    let mut gaps = compute_gaps(&profile.current_skills, &profile.requirements())?;
    sort_by_gap_desc(&mut gaps);

    let critical_count = gaps.iter().filter(|g| g.gap > CRITICAL_GAP).count();
    let exceeding_count = gaps.iter().filter(|g| g.is_met()).count();

    let focus = match gaps.first() {
        Some(top) if top.gap > 0.0 => format!(
            "Focus on improving {} skills within the {department} team through targeted training programs.",
            top.name
        ),
        _ => format!(
            "The {department} team has a good balance of skills. Consider advanced training to further strengthen existing competencies."
        ),
    };

    let critical_summary = if critical_count > 0 {
        format!("Address {critical_count} critical skill gaps in {department} department.")
    } else {
        format!("No critical skill gaps identified in {department} department.")
    };

    let exceeding_summary = if exceeding_count > 0 {
        format!("{exceeding_count} skills exceed requirements in {department} department.")
    } else {
        format!("All skills in {department} department need improvement.")
    };

    let primary = gaps.first().map_or("key skills", |g| g.name.as_str());
    let secondary = gaps.get(1).map_or("secondary gap areas", |g| g.name.as_str());
    let recruiting_advice = format!(
        "Prioritize specialized training for {primary} and consider recruiting profiles with strong backgrounds in {secondary}."
    );

    for gap in &mut gaps {
        gap.current = round_tenths(gap.current);
        gap.required = round_tenths(gap.required);
        gap.gap = round_tenths(gap.gap);
    }

    Ok(DepartmentAnalysis {
        department: department.to_string(),
        gaps,
        critical_count,
        exceeding_count,
        focus,
        critical_summary,
        exceeding_summary,
        recruiting_advice,
    })
}
