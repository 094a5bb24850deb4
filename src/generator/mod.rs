//! README generation over an LLM provider.

use crate::capture::Screenshot;
use crate::catalog::{Category, ComponentDetail};
use crate::error::GenerationError;
use crate::llm::{GenerationRequest, LlmProvider, Message};
use crate::prompts::{build_readme_prompt, README_SYSTEM_PROMPT};

/// Default model for README generation.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Sampling temperature for README generation.
const TEMPERATURE: f64 = 0.5;

/// Token budget for the generated README.
const MAX_TOKENS: u32 = 1500;

/// Generates a README by delegating content synthesis to an LLM.
///
/// Output is nondeterministic across calls even for identical inputs; the
/// generator performs no deterministic formatting of its own.
pub struct ReadmeGenerator {
    client: Box<dyn LlmProvider>,
    model: String,
}

impl ReadmeGenerator {
    /// Create a generator with the given provider and the default model.
    pub fn new(client: Box<dyn LlmProvider>) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model used for generation.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generate the README Markdown from the scraped inputs and template.
    ///
    /// Fails with `GenerationError::EmptyResponse` if the model returns no
    /// content; no validation of the generated Markdown structure is
    /// performed beyond that.
    pub async fn generate_readme(
        &self,
        category: &Category,
        details: &[ComponentDetail],
        screenshots: &[Screenshot],
        template: &str,
    ) -> Result<String, GenerationError> {
        let prompt = build_readme_prompt(category, details, screenshots, template);

        tracing::debug!(
            model = self.model.as_str(),
            prompt_chars = prompt.len(),
            "Requesting README generation"
        );

        let request = GenerationRequest::new(
            self.model.clone(),
            vec![Message::system(README_SYSTEM_PROMPT), Message::user(prompt)],
        )
        .with_temperature(TEMPERATURE)
        .with_max_tokens(MAX_TOKENS);

        let response = self.client.generate(request).await?;

        let content = response
            .first_content()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .ok_or(GenerationError::EmptyResponse)?;

        tracing::info!(
            model = response.model.as_str(),
            tokens = response.usage.total_tokens,
            chars = content.len(),
            "README generated"
        );

        Ok(content)
    }
}
