//! Content generator implementations.

mod openai;
mod prompt;

pub use openai::{OpenAiConfig, OpenAiContentGenerator};
