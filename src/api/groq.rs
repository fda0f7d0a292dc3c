//! Groq transcription provider.
//!
//! Talks to Groq's OpenAI-compatible Whisper API using multipart form data
//! with bearer token authentication.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use super::shared::{self, ProviderRequest, REQUEST_TIMEOUT};
use crate::provider::TranscriptionProvider;

/// Environment variable consulted when no API key is passed explicitly.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Model requested when none is configured.
pub const DEFAULT_GROQ_MODEL: &str = "whisper-large-v3";

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";

/// Transcription provider backed by Groq's Whisper API.
///
/// Groq offers extremely fast transcription with a generous free tier.
pub struct GroqTranscriptionProvider {
    api_key: Option<String>,
    api_url: String,
    model: String,
    timeout: Duration,
}

impl GroqTranscriptionProvider {
    /// Creates a provider, resolving the credential once.
    ///
    /// An explicit `api_key` wins; otherwise the `GROQ_API_KEY` environment
    /// variable is consulted. A missing credential is not an error here —
    /// calls simply produce empty transcripts until one is configured.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.is_empty()).or_else(|| {
            std::env::var(GROQ_API_KEY_ENV)
                .ok()
                .filter(|k| !k.is_empty())
        });
        if api_key.is_none() {
            tracing::warn!("Groq API key not configured for transcription");
        }
        Self {
            api_key,
            api_url: GROQ_API_URL.to_string(),
            model: DEFAULT_GROQ_MODEL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Overrides the model requested from Groq.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[doc(hidden)]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    #[doc(hidden)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl TranscriptionProvider for GroqTranscriptionProvider {
    async fn transcribe(&self, audio_path: &Path) -> String {
        shared::transcribe_file(
            ProviderRequest {
                provider: self.name(),
                endpoint: &self.api_url,
                api_key: self.api_key.as_deref(),
                model: &self.model,
                timeout: self.timeout,
            },
            audio_path,
        )
        .await
    }

    fn name(&self) -> &'static str {
        "Groq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch GROQ_API_KEY.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_key_wins_over_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(GROQ_API_KEY_ENV, "from-env");
        let provider = GroqTranscriptionProvider::new(Some("explicit".to_string()));
        std::env::remove_var(GROQ_API_KEY_ENV);
        assert_eq!(provider.api_key.as_deref(), Some("explicit"));
    }

    #[test]
    fn falls_back_to_env_key() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(GROQ_API_KEY_ENV, "from-env");
        let provider = GroqTranscriptionProvider::new(None);
        std::env::remove_var(GROQ_API_KEY_ENV);
        assert_eq!(provider.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn missing_key_is_not_an_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(GROQ_API_KEY_ENV);
        let provider = GroqTranscriptionProvider::new(None);
        assert!(provider.api_key.is_none());
    }

    #[test]
    fn empty_key_counts_as_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(GROQ_API_KEY_ENV, "");
        let provider = GroqTranscriptionProvider::new(Some(String::new()));
        std::env::remove_var(GROQ_API_KEY_ENV);
        assert!(provider.api_key.is_none());
    }

    #[test]
    fn default_model_and_endpoint() {
        let provider = GroqTranscriptionProvider::new(Some("key".to_string()));
        assert_eq!(provider.model, DEFAULT_GROQ_MODEL);
        assert_eq!(provider.api_url, GROQ_API_URL);

        let provider = provider.with_model("whisper-large-v3-turbo");
        assert_eq!(provider.model, "whisper-large-v3-turbo");
    }
}
