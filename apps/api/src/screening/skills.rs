//! Skill gap detection.
//!
//! Operates on the raw resume text (lowercased only, never tokenized) — a
//! skill like "CI/CD" or "C++" would not survive the scorer's normalization,
//! so membership is a plain case-insensitive substring test.

/// Returns the required skills whose lowercase form does not appear in the
/// lowercased resume text. Input order and duplicates are preserved.
pub fn missing_skills(resume_text: &str, required_skills: &[String]) -> Vec<String> {
    let haystack = resume_text.to_lowercase();
    required_skills
        .iter()
        .filter(|skill| !haystack.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Splits the comma-separated skills form field into trimmed, non-empty
/// entries. A blank field means "no required skills" — not an error.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
