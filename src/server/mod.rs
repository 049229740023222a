//! Axum-based HTTP server for the wiki2brief hub.
//!
//! This module is responsible for setting up the HTTP server, configuring
//! routes, and dispatching incoming requests to either the embedded static
//! pages or the summarizer's API endpoints.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual API endpoints (summarize, stats, health, metrics).
//! - `middleware`: Custom tower/axum middleware for request ID tracking.
//! - `pages`: The compiled-in hub and summarizer HTML pages.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod pages;
mod routes;

pub use routes::{create_router, AppState};
