use serde::{Deserialize, Serialize};

/// A named competency held at a proficiency level in `[0, 5]`.
///
/// Levels are usually whole numbers, but department averages such as `4.2`
/// are valid too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: f64,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: f64) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// How much a role cares about a requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Importance {
    #[default]
    Required,
    Preferred,
    NiceToHave,
}

impl Importance {
    /// Weight used by the importance-weighted score: required=3, preferred=2, nice-to-have=1.
    pub fn weight(self) -> u32 {
        match self {
            Importance::Required => 3,
            Importance::Preferred => 2,
            Importance::NiceToHave => 1,
        }
    }
}

/// A competency threshold attached to a role or department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    pub minimum_level: f64,
    #[serde(default)]
    pub importance: Importance,
}

impl Requirement {
    pub fn new(name: impl Into<String>, minimum_level: f64, importance: Importance) -> Self {
        Self {
            name: name.into(),
            minimum_level,
            importance,
        }
    }
}

/// Shortfall of one requirement. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub name: String,
    pub current: f64,
    pub required: f64,
    /// `max(0, required - current)`
    pub gap: f64,
}

impl SkillGap {
    pub fn is_met(&self) -> bool {
        self.gap <= 0.0
    }
}

/// Aggregate of one skill set against one requirement set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    /// 0 – 100
    pub score: u32,
    pub matched_count: usize,
    /// Requirement names not met at minimum level, in requirement order.
    pub missing_skills: Vec<String>,
}
