//! MediaWiki action API client.
//!
//! Locates encyclopedia articles for free-text topics using a three-stage
//! fallback chain: direct title lookup, disambiguation resolution, then
//! search suggestions. Stage failures degrade to the next stage; the chain
//! as a whole never fails a request.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod client;
mod models;

pub use client::{LookupMethod, ResolvedArticle, WikipediaClient};
pub use models::{Page, PageLink, PageProps, QueryBody, QueryResponse, SearchHit};
