//! OpenAI chat-completions provider.

mod client;
mod config;
mod convert;

pub use client::OpenAiClient;
pub use config::{DEFAULT_OPENAI_MODEL, OPENAI_API_BASE, OpenAiConfig};
