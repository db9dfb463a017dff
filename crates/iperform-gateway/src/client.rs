//! The remote mutation gateway.
//!
//! Exactly two operations touch application state: materialize a brand-new
//! State from a seed description, and apply a free-text action to an
//! existing State. Both go to a hosted Gemini-style `generateContent`
//! endpoint and both run every reply through the sanitizer before it can
//! become state.
//!
//! The failure handling of the two operations is deliberately asymmetric.
//! A failed materialize has lost nothing (the session is just starting), so
//! it recovers locally with the built-in demo dataset. A failed mutate is
//! carrying a user's unsaved intent, so it must surface as an error rather
//! than be papered over.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use iperform_config::GatewayConfig;
use iperform_models::{SchoolState, sanitize};

use crate::error::GatewayError;
use crate::extract::extract_json_object;
use crate::fallback::fallback_state;
use crate::lab::LabReport;
use crate::prompts;
use crate::seed::SeedRequest;

/// The seam between the store and the remote service. The store only ever
/// talks to this trait, so tests can drive every failure path without a
/// network.
#[async_trait]
pub trait StateSynthesizer: Send + Sync {
    /// Materializes a brand-new State, optionally seeded with a school name
    /// and administrator identity.
    async fn materialize(&self, seed: Option<&SeedRequest>)
    -> Result<SchoolState, GatewayError>;

    /// Applies a free-text action to the current State and returns the
    /// complete replacement State.
    async fn mutate(
        &self,
        current: &SchoolState,
        action: &str,
    ) -> Result<SchoolState, GatewayError>;
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// HTTP client for the hosted inference service.
pub struct InferenceClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl InferenceClient {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// One round trip: send a prompt, return the first candidate's text.
    async fn generate(
        &self,
        system: Option<&str>,
        prompt: &str,
        json_reply: bool,
    ) -> Result<String, GatewayError> {
        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        if let Some(system) = system {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }
        if json_reply {
            body["generationConfig"] = json!({ "responseMimeType": "application/json" });
        }

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: truncate_body(&text),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(GatewayError::EmptyResponse)
    }

    /// Reduces a reply to JSON and runs it through the sanitizer.
    fn decode_state(reply: &str) -> Result<SchoolState, GatewayError> {
        let document = extract_json_object(reply)
            .ok_or_else(|| GatewayError::MalformedResponse("no JSON object in reply".into()))?;
        let value: Value = serde_json::from_str(document)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        Ok(sanitize(value))
    }

    /// Runs the virtual-lab advisor over the items currently combined on the
    /// workstation.
    #[instrument(skip(self))]
    pub async fn simulate_experiment(
        &self,
        items: &[String],
    ) -> Result<LabReport, GatewayError> {
        let reply = self
            .generate(
                Some(prompts::LAB_SYSTEM_INSTRUCTION),
                &prompts::lab_prompt(items),
                true,
            )
            .await?;
        let document = extract_json_object(&reply)
            .ok_or_else(|| GatewayError::MalformedResponse("no JSON object in reply".into()))?;
        serde_json::from_str(document).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }

    /// Generates a weekly timetable as markdown text from free-text
    /// constraints.
    #[instrument(skip(self))]
    pub async fn generate_timetable(&self, constraints: &str) -> Result<String, GatewayError> {
        self.generate(Some(prompts::TIMETABLE_SYSTEM_INSTRUCTION), constraints, false)
            .await
    }
}

#[async_trait]
impl StateSynthesizer for InferenceClient {
    #[instrument(skip_all)]
    async fn materialize(
        &self,
        seed: Option<&SeedRequest>,
    ) -> Result<SchoolState, GatewayError> {
        let request_id = Uuid::new_v4();
        info!(request_id = %request_id, seeded = seed.is_some(), "materializing initial state");

        let outcome = self
            .generate(None, &prompts::materialize_prompt(seed), true)
            .await
            .and_then(|reply| Self::decode_state(&reply));

        match outcome {
            Ok(state) => {
                info!(
                    request_id = %request_id,
                    users = state.users.len(),
                    students = state.students.len(),
                    "initial state materialized"
                );
                Ok(state)
            }
            Err(err) => {
                warn!(
                    request_id = %request_id,
                    error = %err,
                    "materialize failed, substituting fallback dataset"
                );
                Ok(fallback_state(seed))
            }
        }
    }

    /// Applies one action. On failure the caller keeps its previous state;
    /// note that the remote side may still have acted on the request before
    /// failing to produce a parseable reply. The wire contract carries no
    /// idempotency key, so a retry is a second request, not a replay.
    #[instrument(skip_all)]
    async fn mutate(
        &self,
        current: &SchoolState,
        action: &str,
    ) -> Result<SchoolState, GatewayError> {
        let request_id = Uuid::new_v4();
        info!(request_id = %request_id, action, "dispatching mutation");

        let state_json =
            serde_json::to_string(current).map_err(|e| GatewayError::Encode(e.to_string()))?;
        let reply = self
            .generate(
                Some(prompts::SYSTEM_INSTRUCTION),
                &prompts::mutate_prompt(&state_json, action),
                true,
            )
            .await?;
        let state = Self::decode_state(&reply)?;

        info!(request_id = %request_id, users = state.users.len(), "mutation applied");
        Ok(state)
    }
}

fn truncate_body(body: &str) -> String {
    const LIMIT: usize = 300;
    if body.len() <= LIMIT {
        body.to_string()
    } else {
        let mut end = LIMIT;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_state_sanitizes_the_reply() {
        let reply = "```json\n{\"users\": [null, {\"username\": \"p\", \"role\": \"Principal\"}]}\n```";
        let state = InferenceClient::decode_state(reply).unwrap();
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.users[0].role, iperform_models::Role::Principal);
    }

    #[test]
    fn test_decode_state_rejects_braceless_reply() {
        let err = InferenceClient::decode_state("I could not do that").unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_endpoint_shape() {
        let client = InferenceClient::new(GatewayConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_truncate_body_limits_length() {
        let long = "x".repeat(1000);
        assert!(truncate_body(&long).len() < 400);
        assert_eq!(truncate_body("short"), "short");
    }
}
