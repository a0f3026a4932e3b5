//! Core types for the SEO audit pipeline: the error taxonomy, the
//! provider-agnostic completion model trait, the value schemas exchanged
//! between agents, and the model-response JSON parser.

pub mod error;
pub mod model;
pub mod parse;
pub mod types;

pub use error::{AuditError, Result};
pub use model::{ChatMessage, CompletionModel, Role};
pub use parse::{parse_json_response, strip_code_fence};
pub use types::*;
