//! Blocking client for the video conversation provider.
//!
//! Creates and ends real-time coach conversations. Each conversation pairs
//! a provider-side persona id (one per coach personality, stored in config
//! after setup) with the shared video replica.

use crate::config::VideoConfig;
use crate::personas::PersonaConfig;
use crate::types::CoachPersonality;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct CreateConversationRequest<'a> {
    persona_id: &'a str,
    replica_id: &'a str,
    conversation_name: &'a str,
    conversational_context: &'a str,
}

#[derive(Serialize)]
struct CreatePersonaRequest<'a> {
    persona_name: String,
    system_prompt: &'a str,
    context: &'a str,
    layers: PersonaLayers<'a>,
}

#[derive(Serialize)]
struct PersonaLayers<'a> {
    perception: PerceptionLayer<'a>,
}

#[derive(Serialize)]
struct PerceptionLayer<'a> {
    visual_awareness_queries: &'a [String],
    audio_awareness_queries: &'a [String],
}

#[derive(Deserialize)]
struct CreatePersonaResponse {
    persona_id: String,
}

/// Provider handle for an active conversation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub conversation_id: String,
    pub conversation_url: String,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the conversation endpoints
pub struct ConversationClient {
    http: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
    replica_id: String,
    personas: crate::config::PersonaIds,
}

impl ConversationClient {
    /// Build a client from configuration; `None` when no API key is set
    pub fn from_config(config: &VideoConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self {
            http: reqwest::blocking::Client::new(),
            api_base: config.api_base.clone(),
            api_key,
            replica_id: config.replica_id.clone(),
            personas: config.personas.clone(),
        })
    }

    /// Register a coach persona with the provider
    ///
    /// Sends the system prompt, context, and perception queries; returns the
    /// provider-side persona id to store in the config.
    pub fn create_persona(&self, persona: &PersonaConfig) -> Result<String> {
        let request = CreatePersonaRequest {
            persona_name: format!("{} - FitCoach AI", persona.name),
            system_prompt: &persona.system_prompt,
            context: &persona.context,
            layers: PersonaLayers {
                perception: PerceptionLayer {
                    visual_awareness_queries: &persona.visual_awareness_queries,
                    audio_awareness_queries: &persona.audio_awareness_queries,
                },
            },
        };

        let response = self
            .http
            .post(format!("{}/personas", self.api_base))
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiError>()
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "no detail".into());
            return Err(Error::Provider(format!(
                "persona create returned {}: {}",
                status, detail
            )));
        }

        let created: CreatePersonaResponse = response.json()?;
        tracing::info!("Created persona {} for '{}'", created.persona_id, persona.name);
        Ok(created.persona_id)
    }

    /// Start a conversation with the given coach personality
    ///
    /// Fails with a config error when the personality has no provider-side
    /// persona id yet.
    pub fn create(
        &self,
        personality: CoachPersonality,
        conversation_name: &str,
        context: &str,
    ) -> Result<ConversationResponse> {
        let persona_id = self.personas.get(personality).ok_or_else(|| {
            Error::Config(format!(
                "No persona id configured for '{}'; run 'fitcoach setup-personas' first",
                personality.id()
            ))
        })?;

        let request = CreateConversationRequest {
            persona_id,
            replica_id: &self.replica_id,
            conversation_name,
            conversational_context: context,
        };

        let response = self
            .http
            .post(format!("{}/conversations", self.api_base))
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiError>()
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "no detail".into());
            return Err(Error::Provider(format!(
                "conversation create returned {}: {}",
                status, detail
            )));
        }

        let conversation: ConversationResponse = response.json()?;
        tracing::info!("Created conversation {}", conversation.conversation_id);
        Ok(conversation)
    }

    /// End an active conversation
    pub fn end(&self, conversation_id: &str) -> Result<()> {
        let response = self
            .http
            .post(format!(
                "{}/conversations/{}/end",
                self.api_base, conversation_id
            ))
            .header("x-api-key", &self.api_key)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Provider(format!(
                "conversation end returned {}",
                status
            )));
        }

        tracing::info!("Ended conversation {}", conversation_id);
        Ok(())
    }
}
