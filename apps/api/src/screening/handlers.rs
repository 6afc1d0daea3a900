//! Axum route handlers for the screening and generation API.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{candidate_name, extract_text};
use crate::generation::{generate_job_description, JdFields};
use crate::screening::ranker::CandidateReport;
use crate::screening::skills::parse_skills;
use crate::screening::{screen_candidates, ResumeDoc};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateJdResponse {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ScreenTextRequest {
    pub jd_text: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub resumes: Vec<ResumeDoc>,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub jd_text: String,
    pub results: Vec<CandidateReport>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jd/generate
///
/// Drafts a job description from structured form fields. Generation backend
/// failure propagates as 503 — there is no partial result to salvage here.
pub async fn handle_generate_jd(
    State(state): State<AppState>,
    Json(fields): Json<JdFields>,
) -> Result<Json<GenerateJdResponse>, AppError> {
    if fields.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let job_description = generate_job_description(state.generator.as_ref(), &fields).await?;

    Ok(Json(GenerateJdResponse { job_description }))
}

/// POST /api/v1/screen/text
///
/// Screens pre-extracted resume texts — the interface for callers that handle
/// document extraction themselves.
pub async fn handle_screen_text(
    State(state): State<AppState>,
    Json(request): Json<ScreenTextRequest>,
) -> Result<Json<ScreenResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    if request.resumes.is_empty() {
        return Err(AppError::Validation(
            "at least one resume is required".to_string(),
        ));
    }

    let results = screen_candidates(
        &request.jd_text,
        &request.required_skills,
        &request.resumes,
        state.generator.as_ref(),
    )
    .await;

    Ok(Json(ScreenResponse {
        jd_text: request.jd_text,
        results,
    }))
}

/// POST /api/v1/screen
///
/// Multipart form: `jd_file` (PDF/DOCX/text upload) or `jd_manual` text field
/// for the job description (the file wins when both are present), an optional
/// comma-separated `skills` field, and repeated `resumes` file fields.
/// Candidate names derive from the uploaded filenames. Unreadable uploads
/// degrade to placeholder text and are scored as-is rather than aborting the
/// batch.
pub async fn handle_screen(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreenResponse>, AppError> {
    let mut jd_from_file: Option<String> = None;
    let mut jd_manual = String::new();
    let mut skills: Vec<String> = Vec::new();
    let mut resumes: Vec<ResumeDoc> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        // Capture name/filename up front: reading the field body consumes it.
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "jd_file" => {
                let filename = field.file_name().unwrap_or("jd").to_string();
                let data: Bytes = field.bytes().await.map_err(bad_multipart)?;
                if !data.is_empty() {
                    jd_from_file = Some(extract_text(&filename, &data));
                }
            }
            "jd_manual" => {
                jd_manual = field.text().await.map_err(bad_multipart)?;
            }
            "skills" => {
                skills = parse_skills(&field.text().await.map_err(bad_multipart)?);
            }
            "resumes" => {
                let filename = field.file_name().unwrap_or("candidate").to_string();
                let data: Bytes = field.bytes().await.map_err(bad_multipart)?;
                resumes.push(ResumeDoc {
                    candidate: candidate_name(&filename),
                    text: extract_text(&filename, &data),
                });
            }
            _ => {}
        }
    }

    let jd_text = jd_from_file.unwrap_or(jd_manual);
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "a job description is required (jd_file or jd_manual)".to_string(),
        ));
    }
    if resumes.is_empty() {
        return Err(AppError::Validation(
            "at least one resume upload is required".to_string(),
        ));
    }

    let results = screen_candidates(&jd_text, &skills, &resumes, state.generator.as_ref()).await;

    Ok(Json(ScreenResponse { jd_text, results }))
}

fn bad_multipart(e: MultipartError) -> AppError {
    AppError::Validation(format!("invalid multipart payload: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{DecodingParams, GenerationError, TextGenerator};
    use async_trait::async_trait;
    use std::sync::Arc;

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

    fn test_state() -> AppState {
        AppState {
            generator: Arc::new(EchoGenerator),
        }
    }

    fn resume(candidate: &str, text: &str) -> ResumeDoc {
        ResumeDoc {
            candidate: candidate.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_screen_text_returns_reports_in_input_order() {
        let request = ScreenTextRequest {
            jd_text: "Python backend engineer with Django and PostgreSQL".to_string(),
            required_skills: vec!["Django".to_string(), "AWS".to_string()],
            resumes: vec![
                resume("First", "Django engineer with PostgreSQL background"),
                resume("Second", "Watercolor painting instructor"),
            ],
        };

        let Json(response) = handle_screen_text(State(test_state()), Json(request))
            .await
            .unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].candidate, "First");
        assert_eq!(response.results[1].candidate, "Second");
        assert!(response.results[0].is_best_match);
        assert_eq!(
            response.results[0].missing_skills,
            vec!["AWS".to_string()]
        );
    }

    #[tokio::test]
    async fn test_screen_text_rejects_empty_jd() {
        let request = ScreenTextRequest {
            jd_text: "   ".to_string(),
            required_skills: vec![],
            resumes: vec![resume("Only", "some text")],
        };

        let result = handle_screen_text(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_screen_text_rejects_empty_batch() {
        let request = ScreenTextRequest {
            jd_text: "Python backend engineer".to_string(),
            required_skills: vec![],
            resumes: vec![],
        };

        let result = handle_screen_text(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_jd_requires_title() {
        let fields = JdFields {
            title: "  ".to_string(),
            years: String::new(),
            skills: String::new(),
            company: String::new(),
            industry: String::new(),
            employment: String::new(),
            location: String::new(),
        };

        let result = handle_generate_jd(State(test_state()), Json(fields)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_jd_returns_generated_text() {
        let fields = JdFields {
            title: "Data Engineer".to_string(),
            years: "5".to_string(),
            skills: "Spark, Airflow".to_string(),
            company: "Acme".to_string(),
            industry: "Retail".to_string(),
            employment: "Contract".to_string(),
            location: "Berlin".to_string(),
        };

        let Json(response) = handle_generate_jd(State(test_state()), Json(fields))
            .await
            .unwrap();
        assert!(response.job_description.contains("Data Engineer"));
    }
}
