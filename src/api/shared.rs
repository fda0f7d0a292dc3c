//! Shared request plumbing for the remote transcription providers.
//!
//! Contains the guarded call sequence every provider runs through: check
//! the credential, check the file, upload, parse. Errors are collapsed to
//! an empty string here so the public `transcribe` surface never fails.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Total time budget for a single transcription request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Response structure for Whisper-style APIs that return `{"text": "..."}`.
///
/// A 2xx body without a `text` field deserializes to an empty transcript
/// rather than an error; the API treats silence and absence the same way.
#[derive(Debug, Deserialize)]
pub(crate) struct WhisperApiResponse {
    /// The transcribed text from the audio file
    #[serde(default)]
    pub text: String,
}

/// Everything needed to issue one upload on behalf of a provider.
pub(crate) struct ProviderRequest<'a> {
    /// Human-readable provider name for log messages
    pub provider: &'static str,
    /// Full URL of the transcription endpoint
    pub endpoint: &'a str,
    /// Bearer credential, if one was resolved at construction
    pub api_key: Option<&'a str>,
    /// Model identifier sent as the `model` form field
    pub model: &'a str,
    /// Total request timeout
    pub timeout: Duration,
}

/// Internal failure taxonomy for one transcription attempt.
///
/// Only used for logging; nothing here crosses the public API boundary.
#[derive(Debug, Error)]
pub(crate) enum TranscribeError {
    #[error("failed to read audio file: {0}")]
    Io(#[from] std::io::Error),
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Parse(#[source] reqwest::Error),
}

/// Runs the full guarded call sequence for one provider.
///
/// The credential and file-existence guards short-circuit before any
/// network activity. Upload failures are logged with the provider name and
/// swallowed; the caller only ever sees a transcript or an empty string.
pub(crate) async fn transcribe_file(request: ProviderRequest<'_>, audio_path: &Path) -> String {
    let Some(api_key) = request.api_key else {
        tracing::warn!("{} API key not configured for transcription", request.provider);
        return String::new();
    };

    if tokio::fs::metadata(audio_path).await.is_err() {
        tracing::error!("Audio file not found: {}", audio_path.display());
        return String::new();
    }

    match post_audio(&request, api_key, audio_path).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("{} transcription error: {e}", request.provider);
            String::new()
        }
    }
}

/// Uploads the audio file and extracts the transcript from the response.
async fn post_audio(
    request: &ProviderRequest<'_>,
    api_key: &str,
    audio_path: &Path,
) -> Result<String, TranscribeError> {
    let audio_data = tokio::fs::read(audio_path).await?;

    let file_name = audio_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let file_part = reqwest::multipart::Part::bytes(audio_data)
        .file_name(file_name)
        .mime_str("audio/mpeg")
        .map_err(|e| TranscribeError::Request {
            message: format!("failed to create file part for upload: {e}"),
            source: e,
        })?;

    let form = reqwest::multipart::Form::new()
        .part("file", file_part)
        .text("model", request.model.to_string());

    tracing::debug!(
        "{} API call:\n  URL: {}\n  Method: POST\n  Headers:\n    Authorization: Bearer <redacted>\n    Content-Type: multipart/form-data\n  Body parameters: model={}",
        request.provider,
        request.endpoint,
        request.model
    );

    // A fresh client per call keeps the timeout and connections scoped to
    // this one request.
    let client = reqwest::Client::builder()
        .timeout(request.timeout)
        .build()
        .map_err(|e| TranscribeError::Request {
            message: format!("failed to build HTTP client: {e}"),
            source: e,
        })?;

    let response = client
        .post(request.endpoint)
        .bearer_auth(api_key)
        .multipart(form)
        .send()
        .await
        .map_err(|e| request_error(request.provider, e))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(TranscribeError::Status {
            status,
            message: describe_status(request.provider, status, &body),
        });
    }

    let parsed: WhisperApiResponse = response.json().await.map_err(TranscribeError::Parse)?;

    tracing::debug!(
        "{} transcription succeeded ({} characters)",
        request.provider,
        parsed.text.len()
    );

    Ok(parsed.text)
}

fn request_error(provider: &str, e: reqwest::Error) -> TranscribeError {
    let message = if e.is_connect() {
        format!("failed to connect to the {provider} API server")
    } else if e.is_timeout() {
        format!("request to {provider} timed out; the API server is not responding")
    } else {
        format!("{provider} network error: {e}")
    };
    TranscribeError::Request { message, source: e }
}

fn describe_status(provider: &str, status: u16, body: &str) -> String {
    match status {
        401 => format!("{provider} API key is invalid or expired"),
        403 => format!("{provider} rejected the request; check the API key and account status"),
        429 => format!("{provider} rate limit hit; wait and try again"),
        500..=599 => format!("{provider} API server is experiencing issues"),
        _ => body.to_string(),
    }
}
