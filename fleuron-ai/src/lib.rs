pub mod announcement;
pub mod client;
pub mod parser;
pub mod prompts;

pub use announcement::AnnouncementWriter;
pub use client::{AnthropicClient, AnthropicConfig, CompletionClient};
pub use parser::{NotesParser, ParsedOrder};

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("completion request failed: {0}")]
    Transport(String),
    #[error("unexpected completion response shape")]
    MalformedResponse,
    #[error("failed to parse AI response as JSON")]
    InvalidJson,
}
