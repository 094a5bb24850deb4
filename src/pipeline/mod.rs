//! Pipeline orchestration for the README agent.

mod orchestrator;

pub use orchestrator::{PipelineError, ReadmeOrchestrator, RunSummary, Stage};
