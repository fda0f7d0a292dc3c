//! Transcription API clients with provider-specific implementations.
//!
//! Both providers speak the same OpenAI-style transcription protocol: one
//! multipart POST carrying a `file` part and a `model` field, bearer token
//! authentication, and a JSON response with the transcript in its `text`
//! field. The common request path lives in `shared`; the provider modules
//! supply endpoint, credential resolution, and default model.

mod groq;
mod openai;
mod shared;

pub use groq::{GroqTranscriptionProvider, DEFAULT_GROQ_MODEL, GROQ_API_KEY_ENV};
pub use openai::{OpenAiTranscriptionProvider, DEFAULT_OPENAI_MODEL, OPENAI_API_KEY_ENV};
