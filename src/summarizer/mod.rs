//! The summarization engine.
//!
//! Owns the request-processing pipeline: validate, probe the summary cache,
//! locate a Wikipedia article through the smart fallback chain, generate the
//! summary (or a direct answer) via the Mistral API, format, memoize.
//!
//! # Components
//!
//! - `engine`: The `Summarizer` orchestrator.
//! - `models`: Request/response payloads and the parameter enums.
//! - `prompts`: Prompt assembly per length tier, language, and thematic mode.
//! - `markdown`: Light Markdown-to-HTML formatting of model output.
//! - `cache`: Bounded LRU memoization of full responses.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod cache;
mod engine;
pub mod markdown;
pub mod models;
pub mod prompts;

pub use cache::SummaryCache;
pub use engine::Summarizer;
