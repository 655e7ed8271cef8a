use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::round_tenths;
use crate::fixtures::models::{Activity, CategoryCount, DepartmentCount, SkillCluster};
use crate::fixtures::store::FixtureStore;
use crate::skills::comparator::compute_gaps;
use crate::skills::validation::ValidationError;

const TOP_GAP_LIMIT: usize = 5;
/// Dashboard threshold; inclusive, unlike the department view.
const CRITICAL_GAP: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSkillGap {
    pub skill: String,
    pub department: String,
    pub gap: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityView {
    pub id: String,
    pub activity_type: &'static str,
    pub title: String,
    pub details: String,
    pub date: NaiveDate,
}

impl From<&Activity> for ActivityView {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            activity_type: activity.type_name(),
            title: activity.title(),
            details: activity.describe(),
            date: activity.date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub employee_count: u32,
    pub department_breakdown: Vec<DepartmentCount>,
    pub skill_distribution: Vec<CategoryCount>,
    pub skill_clusters: Vec<SkillCluster>,
    pub recent_activities: Vec<ActivityView>,
    pub top_skill_gaps: Vec<TopSkillGap>,
    pub critical_gap_count: usize,
}

pub fn dashboard_summary(store: &FixtureStore) -> Result<DashboardSummary, ValidationError> {
    let seed = store.dashboard();

    // Only the reported gap is rounded.
    let mut gaps = Vec::new();
    for (department, profile) in store.department_profiles() {
        for gap in compute_gaps(&profile.current_skills, &profile.requirements())? {
            if gap.gap > 0.0 {
                gaps.push((department, gap));
            }
        }
    }
    let critical_gap_count = gaps.iter().filter(|(_, g)| g.gap >= CRITICAL_GAP).count();

    gaps.sort_by(|(_, a), (_, b)| b.gap.total_cmp(&a.gap));
    let top_skill_gaps = gaps
        .into_iter()
        .take(TOP_GAP_LIMIT)
        .map(|(department, gap)| TopSkillGap {
            skill: gap.name,
            department: department.clone(),
            gap: round_tenths(gap.gap),
        })
        .collect();

    Ok(DashboardSummary {
        employee_count: seed.employee_count,
        department_breakdown: seed.department_breakdown.clone(),
        skill_distribution: seed.skill_distribution.clone(),
        skill_clusters: store.skill_clusters().to_vec(),
        recent_activities: seed.recent_activities.iter().map(ActivityView::from).collect(),
        top_skill_gaps,
        critical_gap_count,
    })
}
