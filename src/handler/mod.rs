//! Request handler module
//!
//! Static CORS server: routes requests onto files under the configured root.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
