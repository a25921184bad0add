//! Scripted [`TextGenerator`] for tests.

use crate::TextGenerator;
use async_trait::async_trait;
use ideagen_core::GenerateRequest;
use ideagen_error::{GenerationError, GenerationErrorKind, GenerationResult};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::Instant;

type Responder = Box<dyn Fn(&GenerateRequest) -> GenerationResult<String> + Send + Sync>;

enum Script {
    Queue(Mutex<VecDeque<GenerationResult<String>>>),
    Fn(Responder),
}

/// Generator that answers from a script and records every call.
pub struct MockGenerator {
    script: Script,
    calls: Mutex<Vec<(Instant, GenerateRequest)>>,
}

impl std::fmt::Debug for MockGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockGenerator")
            .field("calls", &self.call_count())
            .finish_non_exhaustive()
    }
}

impl MockGenerator {
    /// Always answer with `text`.
    pub fn always(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::from_fn(move |_| Ok(text.clone()))
    }

    /// Answer with each result in turn. Calls past the end fail with an
    /// upstream 500.
    pub fn scripted(results: Vec<GenerationResult<String>>) -> Self {
        Self {
            script: Script::Queue(Mutex::new(results.into())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer by calling `f` with the request.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&GenerateRequest) -> GenerationResult<String> + Send + Sync + 'static,
    {
        Self {
            script: Script::Fn(Box::new(f)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of `generate` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }

    /// Instant of each call, in call order.
    pub fn call_instants(&self) -> Vec<Instant> {
        self.calls
            .lock()
            .map(|calls| calls.iter().map(|(at, _)| *at).collect())
            .unwrap_or_default()
    }

    /// Prompt of each call, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.iter().map(|(_, req)| req.prompt().clone()).collect())
            .unwrap_or_default()
    }
}

/// Overload failure shaped like the one Gemini sends.
pub fn overloaded() -> GenerationError {
    GenerationError::new(GenerationErrorKind::from_status(
        503,
        r#"{"error":{"code":503,"message":"The model is overloaded. Please try again later.","status":"UNAVAILABLE"}}"#,
    ))
}

/// Permanent upstream failure with a JSON body.
pub fn rejected(message: &str) -> GenerationError {
    GenerationError::new(GenerationErrorKind::from_status(
        400,
        format!(r#"{{"error":{{"code":400,"message":"{}","status":"INVALID_ARGUMENT"}}}}"#, message),
    ))
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerateRequest) -> GenerationResult<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((Instant::now(), request.clone()));
        }
        match &self.script {
            Script::Fn(f) => f(request),
            Script::Queue(queue) => queue
                .lock()
                .ok()
                .and_then(|mut queue| queue.pop_front())
                .unwrap_or_else(|| {
                    Err(GenerationError::new(GenerationErrorKind::from_status(
                        500,
                        "mock script exhausted",
                    )))
                }),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
