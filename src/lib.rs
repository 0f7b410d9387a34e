//! Local development servers for the science alignment scorecard.
//!
//! - [`handler`]: static file server that adds permissive CORS headers to
//!   every response (binary `serve`).
//! - [`api`]: read-only JSON:API-style mock backend that filters fixture files
//!   by query parameters (binary `mock-api`).
//!
//! Both run on the same accept loop in [`server`] and share [`config`] and
//! [`logger`].

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
