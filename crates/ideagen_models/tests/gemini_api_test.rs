//! Tests against the real Gemini API.
//!
//! Requires GEMINI_API_KEY in the environment or a `.env` file.
//!
//! Run with: cargo test --package ideagen_models --features api -- --ignored

#![cfg(feature = "api")]

use ideagen_core::GenerateRequest;
use ideagen_interface::TextGenerator;
use ideagen_models::{GeminiClient, RetryConfig, RetryingGenerator};

#[tokio::test]
#[ignore] // Makes a billed API call
async fn test_gemini_basic_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let client = RetryingGenerator::new(GeminiClient::from_env()?, RetryConfig::default());

    let request = GenerateRequest::new("Reply with the single word: hello", client.model_name());
    let text = client.generate(&request).await?;

    assert!(!text.trim().is_empty());
    println!("Response: {}", text);
    Ok(())
}
