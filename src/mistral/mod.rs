//! Mistral AI chat API client.
//!
//! Wraps the `/chat/completions` endpoint with a rotating credential pool:
//! the cursor advances on every acquisition and again on every failure, and
//! a completion is attempted at most once per key before giving up.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod client;
mod keys;
mod models;

pub use client::MistralClient;
pub use keys::KeyPool;
pub use models::{ChatCompletionRequest, ChatCompletionResponse, ChatChoice, ChatMessage, Usage};
