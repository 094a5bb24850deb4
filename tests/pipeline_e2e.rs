//! End-to-end pipeline tests.
//!
//! The live test drives a real browser session and a real model endpoint.
//! Run with:
//!   OPENAI_API_KEY=... SESSION_URL=http://localhost:8888/?token=... \
//!     cargo test --test pipeline_e2e -- --ignored

use std::path::PathBuf;

use readme_agent::config::Config;
use readme_agent::pipeline::{PipelineError, ReadmeOrchestrator};
use readme_agent::ConfigError;

fn test_config(api_key: &str, output_dir: PathBuf) -> Config {
    Config {
        api_key: api_key.to_string(),
        model: "gpt-4o".to_string(),
        template_url: readme_agent::template::DEFAULT_TEMPLATE_URL.to_string(),
        output_dir,
        selector_template: "[data-id=\"{name}\"]".to_string(),
        component_count: 2,
        headless: true,
    }
}

#[test]
fn test_missing_credential_fails_before_browser_opens() {
    // The run must terminate with ConfigError before any session is opened.
    // The resolved-credential path keeps this independent of the process
    // environment and any local .env file.
    let err = Config::from_api_key(None).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey));

    let err = Config::from_api_key(Some("   ".to_string())).unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey));
}

#[tokio::test]
async fn test_unreachable_session_url_halts_pipeline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config("sk-test", dir.path().to_path_buf());

    let orchestrator = ReadmeOrchestrator::new(config).expect("config is valid");
    // Port with no listener: the browser cannot reach the session.
    let err = orchestrator
        .run("SENDGRID", "http://127.0.0.1:65535/?token=secret")
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Browser(_)));
    // No downstream step executed: no screenshots, no README.
    assert!(!dir.path().join("README.md").exists());
    assert!(!dir.path().join("SendGridSendEmail.png").exists());
}

#[tokio::test]
#[ignore] // Requires a running development session and a real API key.
async fn test_sendgrid_end_to_end() {
    let session_url =
        std::env::var("SESSION_URL").expect("SESSION_URL must be set for the live e2e test");
    let api_key =
        std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set for the live e2e test");

    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&api_key, dir.path().to_path_buf());

    let orchestrator = ReadmeOrchestrator::new(config).expect("config is valid");
    let summary = orchestrator
        .run("SENDGRID", &session_url)
        .await
        .expect("pipeline should complete");

    assert_eq!(
        summary.components,
        vec!["SendGridSendEmail", "SendgridParseExtractEmail"]
    );
    assert!(dir.path().join("SendGridSendEmail.png").exists());
    assert!(dir.path().join("SendgridParseExtractEmail.png").exists());

    let readme = std::fs::read_to_string(&summary.readme_path).expect("README exists");
    assert!(!readme.is_empty());
    assert!(readme.contains("SendGridSendEmail"));
    assert!(readme.contains("SendgridParseExtractEmail"));
    assert!(readme.contains("SendGridSendEmail.png"));
    assert!(readme.contains("SendgridParseExtractEmail.png"));
}
