use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::skills::models::{Importance, Requirement, Skill};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    Leadership,
    Domain,
    Process,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSkill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub level: f64,
}

impl From<&EmployeeSkill> for Skill {
    fn from(skill: &EmployeeSkill) -> Self {
        Skill::new(skill.name.clone(), skill.level)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub profile_image: String,
    pub skills: Vec<EmployeeSkill>,
    pub join_date: NaiveDate,
    pub projects: Vec<String>,
}

impl Employee {
    /// The employee's skills as comparator input.
    pub fn current_skills(&self) -> Vec<Skill> {
        self.skills.iter().map(Skill::from).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSkill {
    pub id: String,
    pub name: String,
    pub importance: Importance,
    pub minimum_level: f64,
}

impl From<&JobSkill> for Requirement {
    fn from(skill: &JobSkill) -> Self {
        Requirement::new(skill.name.clone(), skill.minimum_level, skill.importance)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub job_level: Option<String>,
    pub required_skills: Vec<JobSkill>,
    pub description: String,
    pub posted_date: NaiveDate,
    pub location: String,
    pub is_remote: bool,
}

impl Job {
    pub fn requirements(&self) -> Vec<Requirement> {
        self.required_skills.iter().map(Requirement::from).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Course,
    Article,
    Video,
    Book,
    Workshop,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub id: String,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: String,
    pub employee_id: String,
    pub target_skills: Vec<String>,
    pub resources: Vec<LearningResource>,
    pub estimated_completion_time: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Redundancy {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCluster {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub employees: Vec<String>,
    pub redundancy: Redundancy,
}

/// Average current levels of a department next to the levels it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentSkillProfile {
    pub current_skills: Vec<Skill>,
    pub required_skills: Vec<Skill>,
}

impl DepartmentSkillProfile {
    /// Department targets carry no importance tier; all count as required.
    pub fn requirements(&self) -> Vec<Requirement> {
        self.required_skills
            .iter()
            .map(|s| Requirement::new(s.name.clone(), s.level, Importance::Required))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: SkillCategory,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityKind {
    SkillAssessment {
        employee: String,
        skill: String,
        level: f64,
    },
    LearningCompletion {
        employee: String,
        course: String,
    },
    JobMatch {
        employee: String,
        job: String,
        score: u32,
    },
    NewEmployee {
        employee: String,
        position: String,
    },
    SkillGapIdentified {
        department: String,
        skill: String,
        gap: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub kind: ActivityKind,
}

impl Activity {
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ActivityKind::SkillAssessment { .. } => "skill_assessment",
            ActivityKind::LearningCompletion { .. } => "learning_completion",
            ActivityKind::JobMatch { .. } => "job_match",
            ActivityKind::NewEmployee { .. } => "new_employee",
            ActivityKind::SkillGapIdentified { .. } => "skill_gap_identified",
        }
    }

    /// "skill_gap_identified" → "Skill Gap Identified"
    pub fn title(&self) -> String {
        self.type_name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn describe(&self) -> String {
        match &self.kind {
            ActivityKind::SkillAssessment {
                employee,
                skill,
                level,
            } => format!("{employee} assessed at level {level} in {skill}"),
            ActivityKind::LearningCompletion { employee, course } => {
                format!("{employee} completed \"{course}\"")
            }
            ActivityKind::JobMatch {
                employee,
                job,
                score,
            } => format!("{employee} matched at {score}% for {job} position"),
            ActivityKind::NewEmployee { employee, position } => {
                format!("{employee} joined as {position}")
            }
            ActivityKind::SkillGapIdentified {
                department,
                skill,
                gap,
            } => format!("Gap of {gap} identified in {skill} for {department}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSeed {
    pub employee_count: u32,
    pub department_breakdown: Vec<DepartmentCount>,
    pub skill_distribution: Vec<CategoryCount>,
    pub recent_activities: Vec<Activity>,
}

/// Full shape of a fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub employees: Vec<Employee>,
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub learning_resources: Vec<LearningResource>,
    #[serde(default)]
    pub learning_paths: Vec<LearningPath>,
    #[serde(default)]
    pub skill_clusters: Vec<SkillCluster>,
    #[serde(default)]
    pub departments: BTreeMap<String, DepartmentSkillProfile>,
    pub dashboard: DashboardSeed,
}
