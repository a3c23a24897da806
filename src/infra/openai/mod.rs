//! OpenAI chat-completions narrative generator.

mod client;
pub mod prompt;

pub use client::OpenAiNarrator;
