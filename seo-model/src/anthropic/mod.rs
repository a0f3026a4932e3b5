//! Anthropic messages-API provider.

mod client;
mod config;
mod convert;

pub use client::AnthropicClient;
pub use config::{ANTHROPIC_API_BASE, ANTHROPIC_VERSION, DEFAULT_ANTHROPIC_MODEL, AnthropicConfig};
