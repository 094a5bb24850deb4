//! LLM client for README generation.
//!
//! Provides an OpenAI-compatible chat-completions client behind the
//! [`LlmProvider`] trait so the generator can be tested against a mock
//! provider without network access.

mod openai;

pub use openai::{
    Choice, GenerationRequest, GenerationResponse, LlmProvider, Message, OpenAiClient, Usage,
};
