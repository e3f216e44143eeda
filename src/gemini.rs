//! Gemini REST client for text generation.
//!
//! Single-shot `generateContent` calls over blocking HTTP. The API key is
//! passed in opaquely by the presentation layer; model and timeout come from
//! the environment so the engine modules stay free of configuration.

use crate::service::{ServiceError, TextGenerator};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use ureq::Agent;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

/// Blocking Gemini client with a bounded per-call timeout.
pub struct GeminiClient {
    agent: Agent,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from an opaque API key.
    ///
    /// `GEMINI_MODEL` overrides the model, `GEMINI_TIMEOUT_SECS` the
    /// whole-call timeout (default 60s — calls never block indefinitely).
    pub fn new(api_key: String) -> Self {
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            .build();
        Self {
            agent: Agent::new_with_config(config),
            api_key,
            model,
        }
    }
}

impl TextGenerator for GeminiClient {
    fn generate_content(&self, prompt: &str) -> Result<String, ServiceError> {
        let url = format!(
            "{BASE_URL}/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let start = Instant::now();
        let mut response = self
            .agent
            .post(url.as_str())
            .send_json(&body)
            .map_err(map_call_err)?;
        let decoded: GenerateResponse = response
            .body_mut()
            .read_json()
            .map_err(|err| ServiceError::Malformed(err.to_string()))?;
        let text = first_candidate_text(decoded)?;

        let elapsed_ms = start.elapsed().as_millis();
        tracing::info!(
            model = %self.model,
            elapsed_ms,
            prompt_bytes = prompt.len(),
            response_bytes = text.len(),
            "generate_content complete"
        );
        Ok(text)
    }
}

fn map_call_err(err: ureq::Error) -> ServiceError {
    match err {
        ureq::Error::StatusCode(code) => ServiceError::Status(code),
        other => ServiceError::Transport(other.to_string()),
    }
}

/// Pull the first candidate's first text part out of a decoded reply.
fn first_candidate_text(response: GenerateResponse) -> Result<String, ServiceError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| ServiceError::Malformed("no candidate text in response".to_string()))
}
