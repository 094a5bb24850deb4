//! Command-line interface for readme-agent.
//!
//! Provides the `generate` command that runs the full scrape-and-generate
//! pipeline against a local development session.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli};
