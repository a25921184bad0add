//! One-shot generation command handler.

use super::CapabilityArg;
use anyhow::Context;
use ideagen_core::Idea;
use ideagen_interface::TextGenerator;
use ideagen_server::{ContentService, ServerConfig, gemini_generator};
use std::path::PathBuf;

/// Handle the `generate` command
#[tracing::instrument(skip(idea, config_path))]
pub async fn handle_generate_command(
    idea: String,
    capability: CapabilityArg,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    let service = ContentService::new(gemini_generator(&config)?);
    let idea = Idea::new(idea)?;

    let json = render(&service, &idea, capability).await?;
    println!("{}", json);
    Ok(())
}

/// Generate the selected fields and format them as pretty JSON, shaped like
/// the matching HTTP route's body.
pub async fn render<D: TextGenerator>(
    service: &ContentService<D>,
    idea: &Idea,
    selection: CapabilityArg,
) -> anyhow::Result<String> {
    let value = match selection.capability() {
        Some(capability) => serde_json::to_value(service.generate(capability, idea).await?),
        None => serde_json::to_value(service.generate_all(idea).await?),
    }
    .context("Failed to serialize generated content")?;

    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideagen_interface::testing::{MockGenerator, rejected};
    use serde_json::{Value, json};

    fn idea() -> Idea {
        Idea::new("night markets").expect("Valid idea")
    }

    #[tokio::test]
    async fn test_single_field_output() {
        let service = ContentService::new(MockGenerator::always("Lanterns After Dark\nextra"));

        let output = render(&service, &idea(), CapabilityArg::Title)
            .await
            .expect("Success");

        let value: Value = serde_json::from_str(&output).expect("Valid JSON");
        assert_eq!(value, json!({ "title": "Lanterns After Dark" }));
        assert!(output.contains('\n'));
    }

    #[tokio::test]
    async fn test_all_fields_output() {
        let service = ContentService::new(MockGenerator::always("#food"));

        let output = render(&service, &idea(), CapabilityArg::All)
            .await
            .expect("Success");

        let value: Value = serde_json::from_str(&output).expect("Valid JSON");
        assert_eq!(value["tags"], json!(["#food"]));
        assert_eq!(service.generator().call_count(), 4);
    }

    #[tokio::test]
    async fn test_generation_failure_is_reported() {
        let service = ContentService::new(MockGenerator::from_fn(|_| Err(rejected("quota"))));

        let err = render(&service, &idea(), CapabilityArg::Keywords)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("quota"));
    }
}
