//! Run configuration for the README agent.
//!
//! The single required credential (`OPENAI_API_KEY`) is read from the
//! process environment, with a local `.env` file loaded first. A missing
//! credential is a `ConfigError` raised before any browser session is
//! opened.

use std::env;
use std::path::PathBuf;

use crate::capture::DEFAULT_SELECTOR_TEMPLATE;
use crate::error::ConfigError;
use crate::generator::DEFAULT_MODEL;
use crate::template::DEFAULT_TEMPLATE_URL;

/// Number of components documented per run unless overridden.
pub const DEFAULT_COMPONENT_COUNT: usize = 2;

/// File name of the final artifact in the output directory.
pub const README_FILE_NAME: &str = "README.md";

/// Configuration for a single agent run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Language-model API credential.
    pub api_key: String,
    /// Model used for README generation.
    pub model: String,
    /// Remote raw-file URL of the README template.
    pub template_url: String,
    /// Directory screenshots and the README are written into.
    pub output_dir: PathBuf,
    /// CSS selector template for component elements (`{name}` placeholder).
    pub selector_template: String,
    /// Number of components to document (the first N listed).
    pub component_count: usize,
    /// Whether the browser runs headless.
    pub headless: bool,
}

impl Config {
    /// Build a configuration from the environment.
    ///
    /// Loads a local `.env` file if present, then requires `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Ignore a missing .env file; only the process environment is
        // authoritative.
        let _ = dotenvy::dotenv();
        Self::from_api_key(env::var("OPENAI_API_KEY").ok())
    }

    /// Build a configuration from an already-resolved credential.
    ///
    /// `None` or a blank value is the missing-credential error. This is the
    /// environment-independent path behind [`Config::from_env`].
    pub fn from_api_key(raw: Option<String>) -> Result<Self, ConfigError> {
        let api_key = raw
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            template_url: DEFAULT_TEMPLATE_URL.to_string(),
            output_dir: PathBuf::from("."),
            selector_template: DEFAULT_SELECTOR_TEMPLATE.to_string(),
            component_count: DEFAULT_COMPONENT_COUNT,
            headless: true,
        })
    }

    /// Override the generation model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the template URL.
    pub fn with_template_url(mut self, url: impl Into<String>) -> Self {
        self.template_url = url.into();
        self
    }

    /// Override the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Override the component element selector template.
    pub fn with_selector_template(mut self, template: impl Into<String>) -> Self {
        self.selector_template = template.into();
        self
    }

    /// Override the number of components to document.
    pub fn with_component_count(mut self, count: usize) -> Self {
        self.component_count = count;
        self
    }

    /// Run the browser headed instead of headless.
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Validate the configuration before any pipeline step executes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.component_count == 0 {
            return Err(ConfigError::InvalidValue {
                key: "component_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.template_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "template_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Path of the final README artifact.
    pub fn readme_path(&self) -> PathBuf {
        self.output_dir.join(README_FILE_NAME)
    }
}
