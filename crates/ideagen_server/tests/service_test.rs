//! Content service tests on paused time.

use ideagen_core::{Capability, Idea, NormalizedOutput};
use ideagen_interface::testing::{MockGenerator, overloaded};
use ideagen_models::{RetryConfig, RetryingGenerator};
use ideagen_server::ContentService;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn idea() -> Idea {
    Idea::new("sourdough at altitude").expect("Valid idea")
}

#[tokio::test(start_paused = true)]
async fn test_single_field_uses_standalone_prompt() {
    let mock = Arc::new(MockGenerator::always("1. flour\n2. starter"));
    let service = ContentService::new(Arc::clone(&mock));

    let output = service
        .generate(Capability::Keywords, &idea())
        .await
        .expect("Success");

    assert_eq!(
        output,
        NormalizedOutput::Keywords(vec!["flour".into(), "starter".into()])
    );
    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Respond with just a plain, numbered list"));
    assert!(prompts[0].contains("\"sourdough at altitude\""));
}

#[tokio::test(start_paused = true)]
async fn test_generate_all_issues_requests_concurrently() {
    let mock = Arc::new(MockGenerator::always("#bread"));
    let service = ContentService::new(Arc::clone(&mock));

    let bundle = service.generate_all(&idea()).await.expect("Success");

    assert_eq!(bundle.tags, vec!["#bread"]);
    assert_eq!(bundle.title, "#bread");
    assert!(bundle.keywords.iter().all(|k| k == "#bread"));

    let instants = mock.call_instants();
    assert_eq!(instants.len(), 4);
    assert!(instants.iter().all(|at| *at == instants[0]));
}

#[tokio::test(start_paused = true)]
async fn test_generate_all_retries_each_field_independently() {
    // The title prompt is overloaded once; the others answer immediately.
    let title_failures = AtomicUsize::new(0);
    let mock = Arc::new(MockGenerator::from_fn(move |request| {
        if request.prompt().starts_with("Write a catchy title")
            && title_failures.fetch_add(1, Ordering::SeqCst) == 0
        {
            return Err(overloaded());
        }
        Ok("Answer".to_string())
    }));
    let generator = RetryingGenerator::new(Arc::clone(&mock), RetryConfig::default());
    let service = ContentService::new(generator);

    let started = tokio::time::Instant::now();
    let bundle = service.generate_all(&idea()).await.expect("Success");

    assert_eq!(bundle.title, "Answer");
    assert_eq!(mock.call_count(), 5);
    assert!(started.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn test_generate_all_fails_fast() {
    let mock = Arc::new(MockGenerator::from_fn(|request| {
        if request.prompt().starts_with("Generate 10 ") {
            Err(overloaded())
        } else {
            Ok("fine".to_string())
        }
    }));
    let generator = RetryingGenerator::new(Arc::clone(&mock), RetryConfig::new(1, Duration::from_secs(1)));
    let service = ContentService::new(generator);

    let err = service.generate_all(&idea()).await.unwrap_err();

    assert!(err.upstream_message().contains("overloaded"));
}
