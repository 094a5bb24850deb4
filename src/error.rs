//! Error types for readme-agent operations.
//!
//! Defines the error taxonomy for each pipeline subsystem:
//! - Configuration loading and validation
//! - Browser session management
//! - Catalog scraping (category and component lookup)
//! - Screenshot capture
//! - Template retrieval
//! - LLM generation

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing API key: OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while driving the browser session.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to reach session at '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    #[error("Element '{0}' not found on page")]
    ElementNotFound(String),

    #[error("Browser protocol error: {0}")]
    Protocol(String),
}

/// Errors that can occur while scraping the component catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Category '{0}' not found in catalog")]
    CategoryNotFound(String),

    #[error("Component '{component}' not found in category '{category}'")]
    ComponentNotFound { component: String, category: String },

    #[error("Unexpected catalog page structure: {0}")]
    MalformedCatalog(String),

    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while capturing component screenshots.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Screenshot target '{selector}' not found for component '{component}'")]
    TargetNotFound { component: String, selector: String },

    #[error("Screenshot rendering failed for '{component}': {message}")]
    RenderFailed { component: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while fetching the README template.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Template request failed: {0}")]
    RequestFailed(String),

    #[error("Template fetch returned HTTP {status} for '{url}'")]
    HttpStatus { status: u16, url: String },
}

/// Errors that can occur during LLM generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("LLM returned an empty result")]
    EmptyResponse,
}
