//! Resume screening — scoring, gap detection, ranking, and notification
//! generation for a batch of candidates.
//!
//! Flow: similarity score + missing skills per resume → rank (tiers + single
//! best match) → notification email per candidate. The ranking pass must
//! complete before any email is generated because the email's tone depends on
//! the best-match flag.

pub mod handlers;
pub mod ranker;
pub mod similarity;
pub mod skills;
pub mod text;

use serde::Deserialize;
use tracing::{info, warn};

use crate::generation::{generate_notification, NotificationStatus, TextGenerator};
use crate::screening::ranker::{rank, CandidateReport};
use crate::screening::similarity::similarity_score;
use crate::screening::skills::missing_skills;

/// One resume ready for screening: candidate display name plus extracted text.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeDoc {
    pub candidate: String,
    pub text: String,
}

/// Runs the screening pipeline over a batch of resumes.
///
/// Scoring and gap detection are pure and independent per candidate. A failed
/// notification call marks only that candidate's report with
/// `notification_error` — the rest of the batch is unaffected.
pub async fn screen_candidates(
    jd_text: &str,
    required_skills: &[String],
    resumes: &[ResumeDoc],
    generator: &dyn TextGenerator,
) -> Vec<CandidateReport> {
    let mut reports: Vec<CandidateReport> = resumes
        .iter()
        .map(|resume| {
            CandidateReport::new(
                resume.candidate.clone(),
                similarity_score(jd_text, &resume.text),
                missing_skills(&resume.text, required_skills),
            )
        })
        .collect();

    rank(&mut reports);

    for report in &mut reports {
        let status = if report.is_best_match {
            NotificationStatus::Selected
        } else {
            NotificationStatus::Rejected
        };

        match generate_notification(generator, &report.candidate, status, &report.missing_skills)
            .await
        {
            Ok(email) => report.notification = Some(email),
            Err(e) => {
                warn!(
                    "Notification generation failed for {}: {e}",
                    report.candidate
                );
                report.notification_error = Some(e.to_string());
            }
        }
    }

    info!("Screened {} resumes", reports.len());
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{DecodingParams, GenerationError};
    use crate::screening::ranker::Tier;
    use async_trait::async_trait;

    /// Echoes the prompt back so tests can assert which template was used.
    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(
            &self,
            prompt: &str,
            _params: &DecodingParams,
        ) -> Result<String, GenerationError> {
            Ok(prompt.to_string())
        }
    }

    /// Fails only for prompts mentioning the configured candidate name.
    struct FailFor(&'static str);

    #[async_trait]
    impl TextGenerator for FailFor {
        async fn generate(
            &self,
            prompt: &str,
            _params: &DecodingParams,
        ) -> Result<String, GenerationError> {
            if prompt.contains(self.0) {
                Err(GenerationError::Unavailable { retries: 3 })
            } else {
                Ok(prompt.to_string())
            }
        }
    }

    const JD: &str = "Looking for a Python backend engineer with 3 years \
                      experience in Django and PostgreSQL";

    fn resume(candidate: &str, text: &str) -> ResumeDoc {
        ResumeDoc {
            candidate: candidate.to_string(),
            text: text.to_string(),
        }
    }

    fn required() -> Vec<String> {
        vec![
            "Django".to_string(),
            "PostgreSQL".to_string(),
            "AWS".to_string(),
        ]
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let resumes = vec![
            resume(
                "Resume A",
                "Senior Python developer: four years building Django REST \
                 services with PostgreSQL, Django ORM tuning, PostgreSQL \
                 replication, backend engineer experience throughout",
            ),
            resume(
                "Resume B",
                "Watercolor landscape painting workshops every weekend",
            ),
        ];

        let reports = screen_candidates(JD, &required(), &resumes, &EchoGenerator).await;

        assert_eq!(reports.len(), 2);
        assert!(reports[0].score > reports[1].score);
        assert_eq!(reports[0].missing_skills, vec!["AWS".to_string()]);
        assert!(reports[0].is_best_match);
        assert!(!reports[1].is_best_match);
    }

    #[tokio::test]
    async fn test_best_match_gets_invitation_others_rejection() {
        let resumes = vec![
            resume("Resume A", JD),
            resume("Resume B", "completely unrelated text here"),
        ];

        let reports = screen_candidates(JD, &[], &resumes, &EchoGenerator).await;

        let best_email = reports[0].notification.as_deref().unwrap();
        let other_email = reports[1].notification.as_deref().unwrap();
        assert!(best_email.contains("interview invitation"));
        assert!(other_email.contains("rejection email"));
    }

    #[tokio::test]
    async fn test_generation_failure_is_isolated_per_candidate() {
        let resumes = vec![
            resume("Alpha", JD),
            resume("Bravo", "unrelated text"),
            resume("Carol", "more unrelated text"),
        ];

        let reports = screen_candidates(JD, &[], &resumes, &FailFor("Bravo")).await;

        assert!(reports[0].notification.is_some());
        assert!(reports[1].notification.is_none());
        assert!(reports[1].notification_error.is_some());
        assert!(reports[2].notification.is_some());
    }

    #[tokio::test]
    async fn test_empty_batch_yields_no_reports() {
        let reports = screen_candidates(JD, &required(), &[], &EchoGenerator).await;
        assert!(reports.is_empty());
    }

    #[tokio::test]
    async fn test_tiers_are_independent_of_batch() {
        let resumes = vec![resume("Only", "Watercolor painting weekends")];
        let reports = screen_candidates(JD, &[], &resumes, &EchoGenerator).await;

        // Sole candidate is still the best match, but its tier reflects the
        // score alone.
        assert!(reports[0].is_best_match);
        assert_eq!(reports[0].tier, Tier::Weak);
    }

    #[tokio::test]
    async fn test_degraded_extraction_text_still_scores() {
        // An unreadable upload degrades to a placeholder string; the batch
        // must keep going and score it like any other text.
        let resumes = vec![
            resume("Good", JD),
            resume("Broken", "[Error reading PDF: file is damaged]"),
        ];

        let reports = screen_candidates(JD, &required(), &resumes, &EchoGenerator).await;

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].score, 0.0);
        assert_eq!(reports[1].missing_skills, required());
    }
}
