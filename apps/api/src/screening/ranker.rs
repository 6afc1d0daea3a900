//! Candidate ranking — tier assignment and best-match selection.
//!
//! Ranking only annotates: output order always equals input order.

use serde::{Deserialize, Serialize};

/// Qualitative bucket derived from a candidate's score. Strictly greater-than
/// boundaries: a score of exactly 75 is Average, exactly 50 is Weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Weak,
    Average,
    Strong,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score > 75.0 {
            Tier::Strong
        } else if score > 50.0 {
            Tier::Average
        } else {
            Tier::Weak
        }
    }
}

/// Per-candidate screening outcome, request-scoped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReport {
    pub candidate: String,
    /// Similarity score in [0, 100], two decimal places.
    pub score: f64,
    pub missing_skills: Vec<String>,
    pub tier: Tier,
    pub is_best_match: bool,
    /// Generated notification email; absent when generation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    /// Populated instead of `notification` when generation failed for this
    /// candidate. Other candidates in the batch are unaffected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_error: Option<String>,
}

impl CandidateReport {
    pub fn new(candidate: String, score: f64, missing_skills: Vec<String>) -> Self {
        Self {
            candidate,
            score,
            missing_skills,
            tier: Tier::from_score(score),
            is_best_match: false,
            notification: None,
            notification_error: None,
        }
    }
}

/// Annotates tiers and flags exactly one best match (none for an empty batch).
/// Best-match selection compares by index, not score equality: the strictly
/// greater test keeps the first of tied maxima.
pub fn rank(reports: &mut [CandidateReport]) {
    let mut best: Option<(usize, f64)> = None;

    for (idx, report) in reports.iter_mut().enumerate() {
        report.tier = Tier::from_score(report.score);
        report.is_best_match = false;

        if best.map_or(true, |(_, top_score)| report.score > top_score) {
            best = Some((idx, report.score));
        }
    }

    if let Some((idx, _)) = best {
        reports[idx].is_best_match = true;
    }
}
