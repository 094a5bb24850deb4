//! readme-agent: documentation agent for component libraries.
//!
//! Drives a headless browser against a locally running development session,
//! scrapes category and component documentation, captures per-component
//! screenshots, fetches a reference README template over HTTP, and delegates
//! README synthesis to a hosted language model. The pipeline is strictly
//! linear with no retries, caching, or partial-failure recovery.

// Core modules
pub mod browser;
pub mod capture;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod template;

// Re-export commonly used error types
pub use error::{
    BrowserError, CaptureError, CatalogError, ConfigError, FetchError, GenerationError,
};
