//! Remote speech-to-text providers behind a single capability trait.
//!
//! This crate turns an audio file into text using interchangeable remote
//! transcription services. A hosting application picks one provider,
//! constructs it once, and calls [`TranscriptionProvider::transcribe`] for
//! each audio file. Failures never propagate to the caller: a call that
//! cannot produce a transcript resolves to an empty string, with the
//! diagnostic detail going to the `tracing` log instead.
//!
//! Two providers are included:
//!
//! - [`GroqTranscriptionProvider`] — Groq's Whisper API, very fast with a
//!   generous free tier.
//! - [`OpenAiTranscriptionProvider`] — OpenAI's transcription API, with a
//!   configurable API base for compatible self-hosted endpoints.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use hark::{GroqTranscriptionProvider, TranscriptionProvider};
//!
//! # async fn demo() {
//! let provider = GroqTranscriptionProvider::new(None);
//! let text = provider.transcribe(Path::new("clip.wav")).await;
//! if !text.is_empty() {
//!     println!("{text}");
//! }
//! # }
//! ```

pub mod api;
pub mod provider;

pub use api::{GroqTranscriptionProvider, OpenAiTranscriptionProvider};
pub use provider::TranscriptionProvider;
