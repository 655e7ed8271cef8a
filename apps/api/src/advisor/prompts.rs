// Prompt constants for the advisor.
// JSON_ONLY_INSTRUCTION from llm_client::prompts is appended at call time.

/// Context for learning-path generation. Sent before the JSON payload of
/// the employee, the target job and the computed skill gaps.
pub const LEARNING_PATH_CONTEXT: &str = r#"You are a career development advisor. Analyze the employee's current skills and the target job requirements to create a personalized learning path.

Consider:
1. Current skill levels vs required levels (the payload lists each computed gap)
2. Critical skills missing for the target role
3. Industry best practices and trends
4. Realistic timeline for skill acquisition
5. Mix of theoretical and practical learning

Return a JSON object with this EXACT schema (no extra fields):
{
  "target_skills": ["TypeScript"],
  "estimated_time": "4 weeks",
  "priority": "High",
  "resources": [
    {
      "title": "TypeScript Fundamentals",
      "provider": "Frontend Masters",
      "skills_addressed": ["TypeScript"],
      "level": "Intermediate",
      "duration": "8 hours",
      "type": "Course",
      "url": "https://example.com/typescript"
    }
  ]
}

Rules:
- priority is one of "High", "Medium", "Low", based on the size of the gaps
- level is one of "Beginner", "Intermediate", "Advanced"
- type is one of "Course", "Article", "Video", "Book", "Workshop"
- url may be omitted when unknown"#;

/// Context for department recommendations. Sent before the JSON payload of
/// the department's current and required skill levels.
pub const DEPARTMENT_CONTEXT: &str = r#"You are a workforce skills advisor. Analyze the department's current skill distribution against its required levels and industry trends.

Return a JSON object with this EXACT schema (no extra fields):
{
  "critical_gaps": ["skill gaps to address immediately"],
  "emerging_skills": ["future-relevant skills to develop"],
  "redundancies": ["over-represented or outdated skills"],
  "recommendations": ["specific action items"]
}"#;
