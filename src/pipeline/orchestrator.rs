//! Orchestrator sequencing the README generation pipeline.
//!
//! The pipeline is a linear stage machine:
//!
//! Init → CategoryExtracted → ComponentsRetrieved → ScreenshotsCaptured →
//! TemplateFetched → ReadmeGenerated → Saved → Done
//!
//! Each transition fires on successful completion of the corresponding step.
//! Any failure halts the run immediately and surfaces the error; there is no
//! checkpoint, no resume, and no cleanup of partially captured screenshots.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::browser::BrowserSession;
use crate::capture::{Screenshot, ScreenshotCapturer};
use crate::catalog::{CatalogExtractor, Category, ComponentDetail};
use crate::config::Config;
use crate::error::{
    BrowserError, CaptureError, CatalogError, ConfigError, FetchError, GenerationError,
};
use crate::generator::ReadmeGenerator;
use crate::llm::OpenAiClient;
use crate::template::TemplateFetcher;

/// Errors that can occur during a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Template fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Linear pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Init,
    CategoryExtracted,
    ComponentsRetrieved,
    ScreenshotsCaptured,
    TemplateFetched,
    ReadmeGenerated,
    Saved,
    Done,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Init => write!(f, "init"),
            Stage::CategoryExtracted => write!(f, "category_extracted"),
            Stage::ComponentsRetrieved => write!(f, "components_retrieved"),
            Stage::ScreenshotsCaptured => write!(f, "screenshots_captured"),
            Stage::TemplateFetched => write!(f, "template_fetched"),
            Stage::ReadmeGenerated => write!(f, "readme_generated"),
            Stage::Saved => write!(f, "saved"),
            Stage::Done => write!(f, "done"),
        }
    }
}

/// Summary of a completed pipeline run.
#[derive(Debug)]
pub struct RunSummary {
    /// Category that was documented.
    pub category: String,
    /// Components documented, in catalog order.
    pub components: Vec<String>,
    /// Screenshot files written.
    pub screenshots: Vec<PathBuf>,
    /// Path of the saved README.
    pub readme_path: PathBuf,
    /// Total run duration.
    pub duration: Duration,
}

/// Sequences the full scrape → capture → fetch → generate → save pipeline.
#[derive(Debug)]
pub struct ReadmeOrchestrator {
    config: Config,
}

impl ReadmeOrchestrator {
    /// Create an orchestrator, validating the configuration up front.
    ///
    /// Validation happens before any browser session is opened, so a missing
    /// credential or invalid setting never reaches a pipeline step.
    pub fn new(config: Config) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the pipeline for a category against the session URL.
    pub async fn run(
        &self,
        category_name: &str,
        session_url: &str,
    ) -> Result<RunSummary, PipelineError> {
        let start = Instant::now();
        let mut stage = Stage::Init;
        tracing::info!(category = category_name, session_url, %stage, "Pipeline starting");

        // Single shared browser session: opened once, reused for catalog,
        // detail, and screenshot operations, released when dropped.
        let session = BrowserSession::open(session_url, self.config.headless)?;
        let extractor = CatalogExtractor::new(&session);

        let category = extractor.extract_category(category_name)?;
        stage = self.advance(stage, Stage::CategoryExtracted);

        let selected = select_components(&category, self.config.component_count);
        let mut details: Vec<ComponentDetail> = Vec::with_capacity(selected.len());
        for name in &selected {
            details.push(extractor.component_detail(category_name, name)?);
        }
        stage = self.advance(stage, Stage::ComponentsRetrieved);

        let capturer = ScreenshotCapturer::new(&self.config.output_dir)?
            .with_selector_template(self.config.selector_template.clone());
        let mut screenshots: Vec<Screenshot> = Vec::with_capacity(selected.len());
        for name in &selected {
            screenshots.push(capturer.capture(&session, name)?);
        }
        stage = self.advance(stage, Stage::ScreenshotsCaptured);

        let template = TemplateFetcher::new(self.config.template_url.clone())
            .fetch()
            .await?;
        stage = self.advance(stage, Stage::TemplateFetched);

        let generator = ReadmeGenerator::new(Box::new(OpenAiClient::new(
            self.config.api_key.clone(),
        )))
        .with_model(self.config.model.clone());
        let readme = generator
            .generate_readme(&category, &details, &screenshots, &template)
            .await?;
        stage = self.advance(stage, Stage::ReadmeGenerated);

        let readme_path = self.config.readme_path();
        fs::write(&readme_path, &readme)?;
        stage = self.advance(stage, Stage::Saved);

        let stage = self.advance(stage, Stage::Done);
        let duration = start.elapsed();
        tracing::info!(
            category = category_name,
            readme = %readme_path.display(),
            %stage,
            elapsed_secs = duration.as_secs_f64(),
            "Pipeline finished"
        );

        Ok(RunSummary {
            category: category.name,
            components: selected,
            screenshots: screenshots.into_iter().map(|s| s.path).collect(),
            readme_path,
            duration,
        })
    }

    /// Log and return the next stage.
    fn advance(&self, from: Stage, to: Stage) -> Stage {
        tracing::info!(from = %from, to = %to, "Stage transition");
        to
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Select the first N components listed under the category.
///
/// A category with fewer than N components proceeds with what exists; the
/// shortfall is logged rather than treated as a failure.
fn select_components(category: &Category, count: usize) -> Vec<String> {
    if category.components.len() < count {
        tracing::warn!(
            category = category.name.as_str(),
            available = category.components.len(),
            requested = count,
            "Category has fewer components than requested; proceeding with available"
        );
    }

    category
        .components
        .iter()
        .take(count)
        .map(|c| c.name.clone())
        .collect()
}
