//! Request routing dispatch module
//!
//! Entry point for static server requests: method validation, dispatch to the
//! file layer, and CORS header injection on the way out.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{Method, Response};

/// Methods the static server answers
const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Raw request path, still percent-encoded
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub if_none_match: Option<&'a str>,
    pub if_modified_since: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn from_parts(parts: &'a Parts) -> Self {
        let header = move |name: &str| parts.headers.get(name).and_then(|v| v.to_str().ok());
        Self {
            path: parts.uri.path(),
            query: parts.uri.query(),
            is_head: parts.method == Method::HEAD,
            if_none_match: header("if-none-match"),
            if_modified_since: header("if-modified-since"),
        }
    }
}

/// Main entry point for static server requests
pub async fn handle_request(parts: &Parts, state: &AppState) -> Response<Full<Bytes>> {
    let response = match parts.method {
        Method::GET | Method::HEAD => {
            let ctx = RequestContext::from_parts(parts);
            let cfg = &state.config.static_server;
            static_files::serve_path(&ctx, &cfg.root, &cfg.index_files).await
        }
        Method::OPTIONS => http::build_options_response(ALLOWED_METHODS),
        _ => {
            logger::log_warning(&format!("Method not allowed: {}", parts.method));
            http::build_405_response(ALLOWED_METHODS)
        }
    };

    http::apply_cors_headers(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::{Request, StatusCode};
    use std::path::Path;

    fn parts(method: Method, uri: &str, headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn state_for(root: &Path) -> AppState {
        AppState::new(&Config::for_dirs(root, root))
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn assert_cors(resp: &Response<Full<Bytes>>) {
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        assert_eq!(resp.headers()["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(resp.headers()["access-control-allow-headers"], "*");
    }

    #[tokio::test]
    async fn test_serves_index_with_cors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Scorecard</h1>").unwrap();
        let state = state_for(dir.path());

        let resp = handle_request(&parts(Method::GET, "/", &[]), &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/html; charset=utf-8");
        assert!(resp.headers().contains_key("etag"));
        assert!(resp.headers().contains_key("last-modified"));
        assert_cors(&resp);
        assert_eq!(body_string(resp).await, "<h1>Scorecard</h1>");
    }

    #[tokio::test]
    async fn test_cors_on_every_method_and_status() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        let state = state_for(dir.path());

        let cases = [
            (Method::GET, "/missing.json", StatusCode::NOT_FOUND),
            (Method::GET, "/data", StatusCode::MOVED_PERMANENTLY),
            (Method::HEAD, "/data/", StatusCode::OK),
            (Method::OPTIONS, "/anything", StatusCode::NO_CONTENT),
            (Method::POST, "/", StatusCode::METHOD_NOT_ALLOWED),
            (Method::DELETE, "/data/", StatusCode::METHOD_NOT_ALLOWED),
        ];
        for (method, uri, expected) in cases {
            let resp = handle_request(&parts(method.clone(), uri, &[]), &state).await;
            assert_eq!(resp.status(), expected, "{method} {uri}");
            assert_cors(&resp);
        }
    }

    #[tokio::test]
    async fn test_redirect_keeps_query() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        let state = state_for(dir.path());

        let resp = handle_request(&parts(Method::GET, "/data?v=2", &[]), &state).await;
        assert_eq!(resp.headers()["location"], "/data/?v=2");
    }

    #[tokio::test]
    async fn test_head_returns_headers_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scores.json"), "[1,2,3]").unwrap();
        let state = state_for(dir.path());

        let resp = handle_request(&parts(Method::HEAD, "/scores.json", &[]), &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "application/json");
        assert_eq!(resp.headers()["content-length"], "7");
        assert_eq!(body_string(resp).await, "");
    }

    #[tokio::test]
    async fn test_conditional_requests() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scores.json"), "[1,2,3]").unwrap();
        let state = state_for(dir.path());

        let first = handle_request(&parts(Method::GET, "/scores.json", &[]), &state).await;
        let etag = first.headers()["etag"].to_str().unwrap().to_string();
        let last_modified = first.headers()["last-modified"].to_str().unwrap().to_string();

        let by_etag = handle_request(
            &parts(Method::GET, "/scores.json", &[("if-none-match", etag.as_str())]),
            &state,
        )
        .await;
        assert_eq!(by_etag.status(), StatusCode::NOT_MODIFIED);
        assert_cors(&by_etag);

        let by_date = handle_request(
            &parts(Method::GET, "/scores.json", &[("if-modified-since", last_modified.as_str())]),
            &state,
        )
        .await;
        assert_eq!(by_date.status(), StatusCode::NOT_MODIFIED);

        let stale_etag = handle_request(
            &parts(
                Method::GET,
                "/scores.json",
                &[("if-none-match", "\"stale\""), ("if-modified-since", last_modified.as_str())],
            ),
            &state,
        )
        .await;
        assert_eq!(stale_etag.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_directory_listing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/topics.json"), "{}").unwrap();
        let state = state_for(dir.path());

        let resp = handle_request(&parts(Method::GET, "/data/", &[]), &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_string(resp).await;
        assert!(html.contains("Directory listing for /data/"));
        assert!(html.contains("<a href=\"topics.json\">topics.json</a>"));
    }
}
