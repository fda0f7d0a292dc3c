//! The capability shared by all transcription providers.

use std::path::Path;

use async_trait::async_trait;

/// A remote service that converts an audio file into text.
///
/// Implementations hold their own immutable configuration (credential,
/// endpoint, model) and are safe to call concurrently; each call opens its
/// own file handle and HTTP connection, scoped to that call.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    /// Transcribes an audio file to text.
    ///
    /// Returns the transcript, or an empty string when transcription could
    /// not be performed: credential missing, file not found, network or
    /// API failure, malformed response. Failures are logged but never
    /// returned, so callers treat "no text" as the uniform degraded
    /// outcome rather than branching on failure reasons.
    async fn transcribe(&self, audio_path: &Path) -> String;

    /// Human-readable provider name, as it appears in log messages.
    fn name(&self) -> &'static str;
}
