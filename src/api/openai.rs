//! OpenAI transcription provider.
//!
//! Talks to OpenAI's transcription API using multipart form data with
//! bearer token authentication. The API base is configurable so the same
//! provider works against compatible self-hosted or alternate-region
//! deployments.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use super::shared::{self, ProviderRequest, REQUEST_TIMEOUT};
use crate::provider::TranscriptionProvider;

/// Environment variable consulted when no API key is passed explicitly.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Model requested when none is configured.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-transcribe";

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const TRANSCRIPTIONS_PATH: &str = "/audio/transcriptions";

/// Transcription provider backed by OpenAI's transcription API.
pub struct OpenAiTranscriptionProvider {
    api_key: Option<String>,
    api_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiTranscriptionProvider {
    /// Creates a provider, resolving the credential once.
    ///
    /// An explicit `api_key` wins; otherwise the `OPENAI_API_KEY`
    /// environment variable is consulted. A missing credential is not an
    /// error here — calls simply produce empty transcripts until one is
    /// configured. `api_base` replaces `https://api.openai.com/v1` when
    /// given; the `/audio/transcriptions` suffix is always appended.
    pub fn new(api_key: Option<String>, api_base: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.is_empty()).or_else(|| {
            std::env::var(OPENAI_API_KEY_ENV)
                .ok()
                .filter(|k| !k.is_empty())
        });
        if api_key.is_none() {
            tracing::warn!("OpenAI API key not configured for transcription");
        }
        let base = api_base.unwrap_or_else(|| OPENAI_API_BASE.to_string());
        let api_url = format!("{}{}", base.trim_end_matches('/'), TRANSCRIPTIONS_PATH);
        Self {
            api_key,
            api_url,
            model: DEFAULT_OPENAI_MODEL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Overrides the model requested from OpenAI.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[doc(hidden)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl TranscriptionProvider for OpenAiTranscriptionProvider {
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
        "OpenAI"
    }
}
