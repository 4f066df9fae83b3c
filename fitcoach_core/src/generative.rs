//! Blocking client for the text-generation provider.
//!
//! Speaks the messages API shape: one user message in, a list of content
//! blocks out; the first block's text carries the plan JSON. One attempt
//! per call, no retry - failures route the synthesizer to its template
//! fallback.

use crate::config::GenerativeConfig;
use crate::planner::{build_plan_prompt, extract_json_object, PlanGenerator};
use crate::types::{UserProfile, WorkoutPlan};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

const API_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// HTTP client for the text-completion endpoint
pub struct GenerativeClient {
    http: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl GenerativeClient {
    /// Build a client from configuration
    ///
    /// Returns `None` when no API key is configured - the expected state
    /// for the template-only setup, not an error.
    pub fn from_config(config: &GenerativeConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            http: reqwest::blocking::Client::new(),
            api_base: config.api_base.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    /// One completion round-trip; returns the first content block's text
    fn complete(&self, prompt: &str) -> Result<String> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(format!("{}/v1/messages", self.api_base))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Provider(format!(
                "text-generation endpoint returned {}",
                status
            )));
        }

        let body: MessagesResponse = response.json()?;
        body.content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| Error::Provider("response contained no content blocks".into()))
    }
}

impl PlanGenerator for GenerativeClient {
    fn generate_plan(&self, profile: &UserProfile) -> Result<WorkoutPlan> {
        let prompt = build_plan_prompt(profile);
        tracing::debug!("Requesting generated plan for '{}'", profile.name);

        let text = self.complete(&prompt)?;
        let json = extract_json_object(&text)
            .ok_or_else(|| Error::Provider("no JSON object in response".into()))?;

        let plan: WorkoutPlan = serde_json::from_str(json)?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_key_means_no_client() {
        let config = GenerativeConfig::default();
        assert!(GenerativeClient::from_config(&config).is_none());

        let mut with_key = GenerativeConfig::default();
        with_key.api_key = Some("test".into());
        assert!(GenerativeClient::from_config(&with_key).is_some());
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{"id":"msg_01","content":[{"type":"text","text":"hello"}],"model":"m"}"#;
        let parsed: MessagesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.content.len(), 1);
        assert_eq!(parsed.content[0].text, "hello");
    }

    #[test]
    fn test_empty_content_tolerated_by_parser() {
        let raw = r#"{"id":"msg_01"}"#;
        let parsed: MessagesResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.content.is_empty());
    }

    #[test]
    fn test_request_shape() {
        let request = MessagesRequest {
            model: "test-model",
            max_tokens: 100,
            messages: vec![Message {
                role: "user",
                content: "hi",
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
