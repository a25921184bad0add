//! Google Gemini integration.
//!
//! Talks to the REST `generateContent` endpoint directly over reqwest.

mod client;
mod dto;

pub use client::{DEFAULT_BASE_URL, GeminiClient, GeminiConfig, GeminiConfigBuilder};
pub use dto::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
