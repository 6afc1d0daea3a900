//! Text generation — job-description drafting and candidate notification
//! emails over a pretrained text2text model.
//!
//! All generation goes through the `TextGenerator` trait so the HTTP backend
//! can be swapped for a mock in tests. Decoding parameters are fixed per
//! operation (see `prompts`); outputs are sampled and therefore
//! non-deterministic across calls.

pub mod hf_client;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generation::prompts::{
    EMAIL_PARAMS, INVITATION_PROMPT_TEMPLATE, JD_PARAMS, JD_PROMPT_TEMPLATE,
    REJECTION_PROMPT_TEMPLATE,
};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("generation backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },

    #[error("generation backend returned empty output")]
    EmptyOutput,
}

/// Decoding parameters for a single generation call.
/// Nucleus sampling with a fixed temperature and repetition penalty; only the
/// output length bounds vary between operations.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DecodingParams {
    pub min_length: u32,
    pub max_length: u32,
    pub top_p: f64,
    pub temperature: f64,
    pub repetition_penalty: f64,
}

/// The generation backend. Carried in `AppState` as `Arc<dyn TextGenerator>`;
/// implementations must tolerate concurrent invocation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &DecodingParams,
    ) -> Result<String, GenerationError>;
}

/// Structured fields for job-description drafting. Only the role title is
/// required; the remaining fields default to empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct JdFields {
    pub title: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub employment: String,
    #[serde(default)]
    pub location: String,
}

/// Email tone selector: the best match gets an interview invitation, everyone
/// else a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Selected,
    Rejected,
}

/// Drafts a short job description from the structured form fields.
pub async fn generate_job_description(
    generator: &dyn TextGenerator,
    fields: &JdFields,
) -> Result<String, GenerationError> {
    let prompt = render_jd_prompt(fields);
    generator.generate(&prompt, &JD_PARAMS).await
}

/// Generates a notification email for one candidate. Rejections name the
/// missing skills when any were detected.
pub async fn generate_notification(
    generator: &dyn TextGenerator,
    candidate: &str,
    status: NotificationStatus,
    missing_skills: &[String],
) -> Result<String, GenerationError> {
    let prompt = render_notification_prompt(candidate, status, missing_skills);
    generator.generate(&prompt, &EMAIL_PARAMS).await
}

fn render_jd_prompt(fields: &JdFields) -> String {
    JD_PROMPT_TEMPLATE
        .replace("{title}", &fields.title)
        .replace("{years}", &fields.years)
        .replace("{skills}", &fields.skills)
        .replace("{company}", &fields.company)
        .replace("{industry}", &fields.industry)
        .replace("{employment}", &fields.employment)
        .replace("{location}", &fields.location)
}

fn render_notification_prompt(
    candidate: &str,
    status: NotificationStatus,
    missing_skills: &[String],
) -> String {
    match status {
        NotificationStatus::Selected => INVITATION_PROMPT_TEMPLATE.replace("{name}", candidate),
        NotificationStatus::Rejected => {
            let missing_clause = if missing_skills.is_empty() {
                String::new()
            } else {
                format!(" ({})", missing_skills.join(", "))
            };
            REJECTION_PROMPT_TEMPLATE
                .replace("{name}", candidate)
                .replace("{missing_skills}", &missing_clause)
        }
    }
}
