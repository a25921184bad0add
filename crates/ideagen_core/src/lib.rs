//! Core data types for the ideagen content generation service.
//!
//! This crate holds everything that does not talk to the network: the caller's
//! idea, prompt templates, the generation request, and the normalizers that
//! turn raw model prose into structured fields.

mod capability;
mod idea;
pub mod normalize;
mod observability;
mod output;
mod request;

pub use capability::{Capability, PromptStyle};
pub use idea::{Idea, IdeaInput};
pub use observability::{LogFormat, init_tracing};
pub use output::{ContentBundle, NormalizedOutput};
pub use request::{DEFAULT_MODEL, GenerateRequest, GenerateRequestBuilder};
