// SPDX-License-Identifier: MPL-2.0
//! Text-generation boundary for the chat widget.
//!
//! The UI talks to a [`ChatService`] and always gets a [`Reply`] back.
//! Failures never surface as errors: a service that cannot answer resolves
//! to [`OFFLINE_REPLY`] and marks the reply as a fallback.

pub mod gemini;
pub mod offline;
pub mod session;

pub use gemini::GeminiService;
pub use offline::OfflineService;
pub use session::{ChatMessage, ChatSession, Role};

use crate::app::config::ChatConfig;
use futures_util::future::BoxFuture;
use std::sync::Arc;
use thiserror::Error;

/// Sentinel reply used whenever the service is unavailable.
pub const OFFLINE_REPLY: &str = "AI Service is currently offline.";

/// Environment variables checked for an API key when the config has none.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Text returned by a chat service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Set when `text` is the offline sentinel rather than a model answer.
    pub fallback: bool,
}

impl Reply {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fallback: false,
        }
    }

    #[must_use]
    pub fn offline() -> Self {
        Self {
            text: OFFLINE_REPLY.to_string(),
            fallback: true,
        }
    }
}

/// Opaque text generator.
///
/// Implementations must resolve every request. The returned future owns
/// everything it needs so it can run inside a `Task::perform`.
pub trait ChatService: Send + Sync + std::fmt::Debug {
    fn send(&self, message: &str) -> BoxFuture<'static, Reply>;
}

/// Reasons a request fell back to the offline reply. Logged, never shown.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no API key configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("response contained no text")]
    EmptyResponse,
}

/// Picks the service for the given settings.
///
/// A Gemini client is built only when chat is enabled and an API key is
/// found in the config or the environment. Anything else yields the offline
/// service.
pub fn service_from_config(config: &ChatConfig) -> Arc<dyn ChatService> {
    if !config.enabled.unwrap_or(true) {
        log::info!("chat disabled in settings; using offline service");
        return Arc::new(OfflineService);
    }

    match resolve_api_key(config) {
        Some(key) => match GeminiService::new(key, config.model.clone(), config.endpoint.clone())
        {
            Ok(service) => Arc::new(service),
            Err(err) => {
                log::warn!("chat service unavailable: {err}");
                Arc::new(OfflineService)
            }
        },
        None => {
            log::info!("{}", ChatError::NotConfigured);
            Arc::new(OfflineService)
        }
    }
}

/// Config key first, then the environment. Blank values count as unset at
/// every step.
fn resolve_api_key(config: &ChatConfig) -> Option<String> {
    let usable = |key: &String| !key.trim().is_empty();
    config.api_key.clone().filter(usable).or_else(|| {
        API_KEY_ENV_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(usable))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_reply_is_flagged() {
        let reply = Reply::offline();
        assert_eq!(reply.text, OFFLINE_REPLY);
        assert!(reply.fallback);
        assert!(!Reply::text("hi").fallback);
    }

    #[tokio::test]
    async fn disabled_chat_uses_offline_service() {
        let config = ChatConfig {
            enabled: Some(false),
            api_key: Some("secret".into()),
            ..ChatConfig::default()
        };
        let service = service_from_config(&config);
        assert_eq!(service.send("hello").await, Reply::offline());
    }

    use crate::app::paths::tests::env_lock;

    fn clear_key_env() {
        for name in API_KEY_ENV_VARS {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn configured_key_builds_gemini_service() {
        let _lock = env_lock();
        clear_key_env();
        let config = ChatConfig {
            api_key: Some("secret".into()),
            ..ChatConfig::default()
        };
        let service = service_from_config(&config);
        assert!(format!("{service:?}").starts_with("GeminiService"));
    }

    #[tokio::test]
    async fn missing_key_everywhere_answers_offline() {
        let service = {
            let _lock = env_lock();
            clear_key_env();
            service_from_config(&ChatConfig::default())
        };
        assert!(format!("{service:?}").starts_with("OfflineService"));
        assert_eq!(service.send("hi").await, Reply::offline());
    }

    #[test]
    fn blank_config_key_falls_through_to_environment() {
        let _lock = env_lock();
        clear_key_env();
        std::env::set_var("GEMINI_API_KEY", "env-key");
        let config = ChatConfig {
            api_key: Some("   ".into()),
            ..ChatConfig::default()
        };

        assert_eq!(resolve_api_key(&config).as_deref(), Some("env-key"));
        let service = service_from_config(&config);
        assert!(format!("{service:?}").starts_with("GeminiService"));

        clear_key_env();
    }

    #[test]
    fn empty_gemini_variable_does_not_hide_api_key() {
        let _lock = env_lock();
        clear_key_env();
        std::env::set_var("GEMINI_API_KEY", "");
        std::env::set_var("API_KEY", "fallback");

        assert_eq!(
            resolve_api_key(&ChatConfig::default()).as_deref(),
            Some("fallback")
        );

        clear_key_env();
    }

    #[test]
    fn blank_values_everywhere_resolve_to_none() {
        let _lock = env_lock();
        clear_key_env();
        std::env::set_var("GEMINI_API_KEY", " ");
        let config = ChatConfig {
            api_key: Some(String::new()),
            ..ChatConfig::default()
        };

        assert_eq!(resolve_api_key(&config), None);

        clear_key_env();
    }

    #[test]
    fn chat_error_messages() {
        assert_eq!(ChatError::NotConfigured.to_string(), "no API key configured");
        assert_eq!(
            ChatError::EmptyResponse.to_string(),
            "response contained no text"
        );
    }
}
