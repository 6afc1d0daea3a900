//! Hugging Face Inference API client — the single generation backend used by
//! the service.
//!
//! ARCHITECTURAL RULE: no other module may call the inference API directly.
//! All generation goes through `TextGenerator`, and the production
//! implementation lives here.
//!
//! Model: google/flan-t5-small (hardcoded — do not make configurable to
//! prevent drift between the two prompt contracts and the model's tuning)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::generation::{DecodingParams, GenerationError, TextGenerator};

/// The text2text-generation model used for every generation call.
pub const MODEL: &str = "google/flan-t5-small";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
    options: HfOptions,
}

#[derive(Debug, Serialize)]
struct HfParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
    top_p: f64,
    temperature: f64,
    repetition_penalty: f64,
    num_return_sequences: u32,
}

impl From<&DecodingParams> for HfParameters {
    fn from(params: &DecodingParams) -> Self {
        Self {
            max_length: params.max_length,
            min_length: params.min_length,
            do_sample: true,
            top_p: params.top_p,
            temperature: params.temperature,
            repetition_penalty: params.repetition_penalty,
            num_return_sequences: 1,
        }
    }
}

#[derive(Debug, Serialize)]
struct HfOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct HfGeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct HfErrorBody {
    // The API returns either a plain string or a list of messages here.
    error: serde_json::Value,
}

/// Production `TextGenerator` over the hosted inference API.
/// Wraps the endpoint with retry logic and a request timeout; timeouts and
/// exhausted retries both surface as backend unavailability.
pub struct HfTextGenClient {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl HfTextGenClient {
    pub fn new(api_url: &str, api_token: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: endpoint_for(api_url),
            api_token,
        }
    }
}

#[async_trait]
impl TextGenerator for HfTextGenClient {
    /// Submits a prompt to the inference endpoint.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    async fn generate(
        &self,
        prompt: &str,
        params: &DecodingParams,
    ) -> Result<String, GenerationError> {
        let request_body = HfRequest {
            inputs: prompt,
            parameters: HfParameters::from(params),
            options: HfOptions {
                wait_for_model: true,
            },
        };

        let mut last_error: Option<GenerationError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Generation attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_token)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(GenerationError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Generation API returned {}: {}", status, body);
                last_error = Some(GenerationError::Api {
                    status: status.as_u16(),
                    message: parse_error_message(&body),
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(GenerationError::Api {
                    status: status.as_u16(),
                    message: parse_error_message(&body),
                });
            }

            let outputs: Vec<HfGeneratedText> = response.json().await?;
            let text = outputs
                .into_iter()
                .map(|o| o.generated_text)
                .find(|t| !t.trim().is_empty())
                .ok_or(GenerationError::EmptyOutput)?;

            debug!("Generation succeeded: {} output chars", text.len());

            return Ok(text);
        }

        Err(last_error.unwrap_or(GenerationError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}

fn endpoint_for(api_url: &str) -> String {
    format!("{}/models/{}", api_url.trim_end_matches('/'), MODEL)
}

/// Pulls the human-readable message out of an inference API error body,
/// falling back to the raw body when it is not the expected JSON shape.
fn parse_error_message(body: &str) -> String {
    match serde_json::from_str::<HfErrorBody>(body) {
        Ok(HfErrorBody {
            error: serde_json::Value::String(message),
        }) => message,
        Ok(HfErrorBody { error }) => error.to_string(),
        Err(_) => body.to_string(),
    }
}
