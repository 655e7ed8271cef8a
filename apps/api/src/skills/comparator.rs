//! Skill/Requirement Comparator — per-requirement gaps and aggregate match scores.
//!
//! Deterministic scoring is an unweighted ratio of met requirements. The
//! importance-weighted score is reported next to it and never replaces it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::skills::models::{MatchScore, Requirement, Skill, SkillGap};
use crate::skills::validation::{validate_requirements, validate_skills, ValidationError};

/// Full comparison of one skill set against one requirement set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub gaps: Vec<SkillGap>,
    pub match_score: MatchScore,
    pub weighted_score: u32,
}

/// Computes one gap per requirement, in requirement order.
///
/// Names match exactly (case-sensitive). A requirement with no matching
/// skill is compared against level 0.
pub fn compute_gaps(
    current_skills: &[Skill],
    required_skills: &[Requirement],
) -> Result<Vec<SkillGap>, ValidationError> {
    validate_skills(current_skills)?;
    validate_requirements(required_skills)?;
    Ok(gaps_for(current_skills, required_skills))
}

/// Ratio score: `round(100 * matched / total)`, or 100 for an empty requirement set.
pub fn compute_match_score(
    current_skills: &[Skill],
    requirements: &[Requirement],
) -> Result<MatchScore, ValidationError> {
    let gaps = compute_gaps(current_skills, requirements)?;
    Ok(score_from_gaps(&gaps))
}

/// Importance-weighted score (required=3, preferred=2, nice-to-have=1).
pub fn compute_weighted_score(
    current_skills: &[Skill],
    requirements: &[Requirement],
) -> Result<u32, ValidationError> {
    let gaps = compute_gaps(current_skills, requirements)?;
    Ok(weighted_score_from_gaps(&gaps, requirements))
}

/// Runs the full comparison with a single validation pass.
pub fn compare(
    current_skills: &[Skill],
    requirements: &[Requirement],
) -> Result<Comparison, ValidationError> {
    let gaps = compute_gaps(current_skills, requirements)?;
    let match_score = score_from_gaps(&gaps);
    let weighted_score = weighted_score_from_gaps(&gaps, requirements);
    Ok(Comparison {
        gaps,
        match_score,
        weighted_score,
    })
}

/// Derives the ratio score from already-computed gaps.
pub fn score_from_gaps(gaps: &[SkillGap]) -> MatchScore {
    let matched_count = gaps.iter().filter(|g| g.is_met()).count();
    let missing_skills = gaps
        .iter()
        .filter(|g| !g.is_met())
        .map(|g| g.name.clone())
        .collect();

    MatchScore {
        score: percentage(matched_count as f64, gaps.len() as f64),
        matched_count,
        missing_skills,
    }
}

/// `gaps` must be the output of `compute_gaps` for `requirements` (same order).
pub fn weighted_score_from_gaps(gaps: &[SkillGap], requirements: &[Requirement]) -> u32 {
    let total: u32 = requirements.iter().map(|r| r.importance.weight()).sum();
    let met: u32 = gaps
        .iter()
        .zip(requirements)
        .filter(|(gap, _)| gap.is_met())
        .map(|(_, req)| req.importance.weight())
        .sum();
    percentage(met as f64, total as f64)
}

/// Stable sort, largest gap first.
pub fn sort_by_gap_desc(gaps: &mut [SkillGap]) {
    gaps.sort_by(|a, b| b.gap.total_cmp(&a.gap));
}

fn gaps_for(current_skills: &[Skill], required_skills: &[Requirement]) -> Vec<SkillGap> {
    let levels: HashMap<&str, f64> = current_skills
        .iter()
        .map(|s| (s.name.as_str(), s.level))
        .collect();

    required_skills
        .iter()
        .map(|req| {
            let current = levels.get(req.name.as_str()).copied().unwrap_or(0.0);
            SkillGap {
                name: req.name.clone(),
                current,
                required: req.minimum_level,
                gap: (req.minimum_level - current).max(0.0),
            }
        })
        .collect()
}

/// `round(100 * part / total)`, or 100 when `total` is zero.
pub fn percentage(part: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 100;
    }
    ((part / total) * 100.0).round() as u32
}
