//! Tests for the overload retry wrapper.

use ideagen_core::GenerateRequest;
use ideagen_error::{GenerationError, GenerationErrorKind, RetryableError};
use ideagen_interface::TextGenerator;
use ideagen_interface::testing::{MockGenerator, overloaded, rejected};
use ideagen_models::{RetryConfig, RetryingGenerator, generate_with_retry};
use std::time::Duration;

fn request() -> GenerateRequest {
    GenerateRequest::new("Write a title", "mock-model")
}

#[tokio::test(start_paused = true)]
async fn test_succeeds_after_overloads_with_linear_backoff() {
    let mock = MockGenerator::scripted(vec![
        Err(overloaded()),
        Err(overloaded()),
        Ok("Finally".to_string()),
    ]);

    let text = generate_with_retry(&mock, &request(), &RetryConfig::default())
        .await
        .expect("Third attempt succeeds");

    assert_eq!(text, "Finally");
    assert_eq!(mock.call_count(), 3);

    let instants = mock.call_instants();
    let first_gap = instants[1] - instants[0];
    let second_gap = instants[2] - instants[1];
    assert!(first_gap >= Duration::from_millis(1000), "first gap {first_gap:?}");
    assert!(first_gap < Duration::from_millis(2000), "first gap {first_gap:?}");
    assert!(second_gap >= Duration::from_millis(2000), "second gap {second_gap:?}");
    assert!(second_gap < Duration::from_millis(3000), "second gap {second_gap:?}");
}

#[tokio::test(start_paused = true)]
async fn test_success_on_first_call_does_not_wait() {
    let mock = MockGenerator::always("Quick");
    let started = tokio::time::Instant::now();

    let text = generate_with_retry(&mock, &request(), &RetryConfig::default())
        .await
        .expect("Success");

    assert_eq!(text, "Quick");
    assert_eq!(mock.call_count(), 1);
    assert!(started.elapsed() < Duration::from_millis(1));
}

#[tokio::test(start_paused = true)]
async fn test_non_overload_error_is_not_retried() {
    let mock = MockGenerator::scripted(vec![
        Err(rejected("API key not valid")),
        Ok("never reached".to_string()),
    ]);

    let err = generate_with_retry(&mock, &request(), &RetryConfig::default())
        .await
        .unwrap_err();

    assert_eq!(mock.call_count(), 1);
    assert!(matches!(err.kind, GenerationErrorKind::Upstream { status: 400, .. }));
}

#[tokio::test(start_paused = true)]
async fn test_empty_response_is_not_retried() {
    let mock = MockGenerator::scripted(vec![
        Err(GenerationError::new(GenerationErrorKind::Empty)),
        Ok("never reached".to_string()),
    ]);

    let err = generate_with_retry(&mock, &request(), &RetryConfig::default())
        .await
        .unwrap_err();

    assert_eq!(mock.call_count(), 1);
    assert_eq!(err.kind, GenerationErrorKind::Empty);
}

#[tokio::test(start_paused = true)]
async fn test_exhaustion_returns_last_overload() {
    let mock = MockGenerator::from_fn(|_| Err(overloaded()));

    let err = generate_with_retry(&mock, &request(), &RetryConfig::default())
        .await
        .unwrap_err();

    assert_eq!(mock.call_count(), 3);
    assert!(err.is_retryable());
    assert!(err.upstream_message().contains("overloaded"));
}

#[tokio::test(start_paused = true)]
async fn test_configured_bound_is_respected() {
    let mock = MockGenerator::from_fn(|_| Err(overloaded()));
    let config = RetryConfig::new(5, Duration::from_millis(10));

    let started = tokio::time::Instant::now();
    let result = generate_with_retry(&mock, &request(), &config).await;

    assert!(result.is_err());
    assert_eq!(mock.call_count(), 5);
    // 10 + 20 + 30 + 40 ms of backoff
    assert!(started.elapsed() >= Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn test_single_attempt_never_retries() {
    let mock = MockGenerator::from_fn(|_| Err(overloaded()));
    let config = RetryConfig::new(1, Duration::from_secs(1));

    let result = generate_with_retry(&mock, &request(), &config).await;

    assert!(result.is_err());
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_retrying_generator_delegates() {
    let mock = MockGenerator::scripted(vec![Err(overloaded()), Ok("Second".to_string())]);
    let generator = RetryingGenerator::new(mock, RetryConfig::default());

    assert_eq!(generator.model_name(), "mock-model");
    let text = generator.generate(&request()).await.expect("Retry succeeds");

    assert_eq!(text, "Second");
    assert_eq!(generator.inner().call_count(), 2);
}
