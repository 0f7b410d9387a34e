//! HTTP protocol layer module
//!
//! Protocol helpers shared by the static server and the mock API: response
//! builders, CORS injection, MIME detection and cache validators.

pub mod cache;
pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used items
pub use cors::apply_cors_headers;
pub use response::{
    build_304_response, build_404_response, build_405_response, build_500_response,
    build_file_response, build_html_response, build_json_response, build_options_response,
    build_redirect_response,
};
