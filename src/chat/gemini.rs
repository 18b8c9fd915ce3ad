// SPDX-License-Identifier: MPL-2.0
//! Gemini `generateContent` client.

use super::{ChatError, ChatService, Reply};
use crate::gallery::catalog::{OWNER, PROJECTS, SKILLS};
use futures_util::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiService {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The key stays out of logs.
        f.debug_struct("GeminiService")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiService {
    /// Builds a client. `model` and `endpoint` fall back to the defaults.
    pub fn new(
        api_key: String,
        model: Option<String>,
        endpoint: Option<String>,
    ) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        })
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn request(
        client: reqwest::Client,
        url: String,
        api_key: String,
        message: String,
    ) -> Result<String, ChatError> {
        let body = GenerateRequest::new(&system_instruction(), &message);
        let response = client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ChatError::Status(response.status()));
        }

        let parsed: GenerateResponse = response.json().await?;
        extract_text(&parsed).ok_or(ChatError::EmptyResponse)
    }
}

impl ChatService for GeminiService {
    fn send(&self, message: &str) -> BoxFuture<'static, Reply> {
        let client = self.client.clone();
        let url = self.url();
        let api_key = self.api_key.clone();
        let message = message.to_string();

        async move {
            match Self::request(client, url, api_key, message).await {
                Ok(text) => Reply::text(text),
                Err(err) => {
                    log::warn!("chat request fell back to offline reply: {err}");
                    Reply::offline()
                }
            }
        }
        .boxed()
    }
}

/// Persona handed to the model with every request.
fn system_instruction() -> String {
    let projects: Vec<String> = PROJECTS
        .iter()
        .map(|p| format!("{} ({}, {})", p.title, p.tech_stack, p.year))
        .collect();
    format!(
        "You are the terminal assistant on {OWNER}'s portfolio. {OWNER} is a web developer \
         and ethical security researcher. Core skills: {}. Learning: {}. Security tools \
         (ethical use only): {}. Projects: {}. Answer briefly in a hacker-terminal tone and \
         never help with illegal activity.",
        SKILLS.mastered.join(", "),
        SKILLS.intermediate.join(", "),
        SKILLS.tools.join(", "),
        projects.join("; "),
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

impl GenerateRequest {
    fn new(instruction: &str, message: &str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(instruction.to_string()),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(message.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

/// Joins the text parts of the first candidate.
fn extract_text(response: &GenerateResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text: String = candidate
        .content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
