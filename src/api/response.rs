// API response utility functions module

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use super::document::ResourceDocument;

/// Serialize a resource document as `application/vnd.api+json`
pub fn document_response(doc: &ResourceDocument) -> Response<Full<Bytes>> {
    match serde_json::to_vec(doc) {
        Ok(body) => http::build_json_response(StatusCode::OK, body, mime::JSON_API),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            http::build_500_response()
        }
    }
}

#[derive(Serialize)]
struct Detail<'a> {
    detail: &'a str,
}

fn detail_response(status: StatusCode, detail: &str) -> Response<Full<Bytes>> {
    let body = serde_json::to_vec(&Detail { detail }).unwrap_or_default();
    http::build_json_response(status, body, "application/json")
}

/// 404 Not Found response
pub fn not_found() -> Response<Full<Bytes>> {
    detail_response(StatusCode::NOT_FOUND, "Not Found")
}

/// 405 Method Not Allowed response
pub fn method_not_allowed() -> Response<Full<Bytes>> {
    let mut resp = detail_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    resp.headers_mut()
        .insert(hyper::header::ALLOW, hyper::header::HeaderValue::from_static("GET"));
    resp
}
