//! bookmarkd server
//!
//! Wires the core store and resolver to an HTTP server: folder pages, a JSON
//! API, explicit and periodic reloads, logging and signal handling.
//!
//! # Modules
//!
//! - [`http`] - axum router, endpoints, HTML rendering
//! - [`cli`] - Command-line flags to `BookmarkdConfig`
//! - [`logging`] - tracing subscriber setup
//! - [`reload`] - Periodic reload task
//! - [`shutdown`] - SIGINT / SIGTERM handling

pub mod cli;
pub mod http;
pub mod logging;
pub mod reload;
pub mod shutdown;
