//! Deterministic resume-to-job matching by skill-name detection.
//!
//! A job skill counts as present when its name appears in the resume text,
//! case-insensitively and on word boundaries ("Java" does not match inside
//! "JavaScript").

use serde::Serialize;

use crate::fixtures::compare_ids;
use crate::fixtures::models::Job;
use crate::skills::comparator::percentage;

/// Missing skills named in the first recommendation.
const TOP_MISSING: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeMatch {
    pub job_id: String,
    pub job_title: String,
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Scores the resume against every job, best first (ties by job id).
pub fn analyze_resume(text: &str, jobs: &[Job]) -> Vec<ResumeMatch> {
    let haystack = text.to_lowercase();

    let mut results: Vec<ResumeMatch> = jobs
        .iter()
        .map(|job| {
            let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job
                .required_skills
                .iter()
                .map(|s| s.name.clone())
                .partition(|name| mentions(&haystack, name));

            ResumeMatch {
                job_id: job.id.clone(),
                job_title: job.title.clone(),
                score: percentage(matched_skills.len() as f64, job.required_skills.len() as f64),
                recommendations: recommendations(job, &missing_skills),
                matched_skills,
                missing_skills,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| compare_ids(&a.job_id, &b.job_id))
    });
    results
}

/// `haystack` must already be lowercased.
fn mentions(haystack: &str, skill: &str) -> bool {
    let needle = skill.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(&needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

fn recommendations(job: &Job, missing: &[String]) -> Vec<String> {
    let mut recs = Vec::new();
    if missing.is_empty() {
        recs.push(format!(
            "Your resume covers every listed skill for the {} role",
            job.title
        ));
    } else {
        let top: Vec<&str> = missing.iter().take(TOP_MISSING).map(String::as_str).collect();
        recs.push(format!("Consider developing skills in {}", top.join(", ")));
    }
    recs.push("Highlight relevant experience in your application".to_string());
    recs.push(format!(
        "Network with current employees in the {} department",
        job.department
    ));
    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::store::FixtureStore;

    #[test]
    fn test_word_boundaries() {
        let text = "senior javascript engineer, some node.js and html/css";
        assert!(mentions(text, "JavaScript"));
        assert!(!mentions(text, "Java"));
        assert!(mentions(text, "Node.js"));
        assert!(mentions(text, "HTML/CSS"));
        assert!(!mentions(text, "SQL"));
        assert!(!mentions(text, "  "));
    }

    #[test]
    fn test_symbols_at_skill_edges() {
        let text = "c++ services, .net core apis, c# tooling";
        assert!(mentions(text, "C++"));
        assert!(mentions(text, ".NET"));
        assert!(mentions(text, "C#"));
        assert!(!mentions("asp.net mvc", ".NET"));
        assert!(!mentions("modern c++17", "C++"));
    }

    #[test]
    fn test_later_occurrence_can_match() {
        // first "sql" is inside "mysqlx", second stands alone
        assert!(mentions("mysqlx tooling, then sql daily", "SQL"));
    }

    #[test]
    fn test_data_resume_ranks_analyst_first() {
        let store = FixtureStore::builtin().unwrap();
        let text = "Data Analysis with SQL and Python. Data Visualization in Tableau. Advanced Excel.";
        let results = analyze_resume(text, store.jobs());

        assert_eq!(results.len(), 5);
        let top = &results[0];
        assert_eq!(top.job_id, "3");
        assert_eq!(top.score, 100);
        assert!(top.missing_skills.is_empty());
        assert!(top.recommendations[0].contains("covers every listed skill"));
    }

    #[test]
    fn test_missing_skills_in_requirement_order() {
        let store = FixtureStore::builtin().unwrap();
        let results = analyze_resume("I write JavaScript and React.", store.jobs());
        let full_stack = results.iter().find(|r| r.job_id == "1").unwrap();

        assert_eq!(full_stack.matched_skills, vec!["JavaScript", "React"]);
        assert_eq!(full_stack.missing_skills, vec!["Node.js", "MongoDB", "TypeScript"]);
        assert_eq!(full_stack.score, 40);
        assert_eq!(
            full_stack.recommendations[0],
            "Consider developing skills in Node.js, MongoDB, TypeScript"
        );
        assert_eq!(results[0].job_id, "1");
    }

    #[test]
    fn test_no_matches_sorted_by_job_id() {
        let store = FixtureStore::builtin().unwrap();
        let results = analyze_resume("gardening", store.jobs());
        let ids: Vec<&str> = results.iter().map(|r| r.job_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(results.iter().all(|r| r.score == 0));
    }
}
