//! CLI command definitions for readme-agent.

use clap::Parser;
use tracing::info;

use crate::capture::DEFAULT_SELECTOR_TEMPLATE;
use crate::config::{Config, DEFAULT_COMPONENT_COUNT};
use crate::generator::DEFAULT_MODEL;
use crate::pipeline::ReadmeOrchestrator;
use crate::template::DEFAULT_TEMPLATE_URL;

/// README generation agent for component-library documentation.
#[derive(Parser)]
#[command(name = "readme-agent")]
#[command(about = "Scrape a component catalog and generate a styled README")]
#[command(version)]
#[command(
    long_about = "readme-agent drives a headless browser against a locally running development \
session, scrapes category and component documentation, captures per-component screenshots, \
fetches a reference README template, and asks a language model to produce README.md.\n\n\
The OPENAI_API_KEY environment variable (or a local .env file) must be set.\n\n\
Example usage:\n  readme-agent generate --category SENDGRID --session-url http://localhost:8888/?token=..."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Run the full pipeline and write README.md.
    #[command(alias = "gen")]
    Generate(GenerateArgs),
}

/// Arguments for `readme-agent generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Category (component library) name to document, e.g. "SENDGRID".
    #[arg(short, long)]
    pub category: String,

    /// URL of the running development session serving the catalog page.
    #[arg(short = 'u', long)]
    pub session_url: String,

    /// Output directory for screenshots and README.md.
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Raw-file URL of the README template to imitate.
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_URL)]
    pub template_url: String,

    /// Model to use for README generation.
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Number of components to document (the first N listed).
    #[arg(short = 'n', long, default_value_t = DEFAULT_COMPONENT_COUNT)]
    pub components: usize,

    /// CSS selector template for component elements ({name} placeholder).
    #[arg(long, default_value = DEFAULT_SELECTOR_TEMPLATE)]
    pub selector: String,

    /// Run the browser with a visible window instead of headless.
    #[arg(long)]
    pub headed: bool,
}

/// Parse CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI with pre-parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate(args).await,
    }
}

/// Execute the `generate` command.
async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    // Credential check happens before the browser session is opened; a
    // missing key terminates the run here.
    let config = Config::from_env()?
        .with_model(args.model)
        .with_template_url(args.template_url)
        .with_output_dir(args.output)
        .with_selector_template(args.selector)
        .with_component_count(args.components)
        .with_headless(!args.headed);

    let orchestrator = ReadmeOrchestrator::new(config)?;
    let summary = orchestrator.run(&args.category, &args.session_url).await?;

    info!(
        category = summary.category.as_str(),
        components = ?summary.components,
        elapsed_secs = summary.duration.as_secs_f64(),
        "Generation complete"
    );
    for path in &summary.screenshots {
        println!("Screenshot saved: {}", path.display());
    }
    println!("README saved: {}", summary.readme_path.display());

    Ok(())
}
