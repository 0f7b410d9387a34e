// API module entry
// Read-only mock of the science index backend, served from JSON fixture files

pub mod document;
pub mod filter;
pub mod fixtures;
mod response;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{Method, Response, StatusCode};

use crate::config::AppState;
use crate::http;
use crate::logger;

pub use document::{is_present, ResourceDocument, ResourceRecord};
pub use filter::{apply_filters, Comparison, FilterParam, QueryParams};
pub use fixtures::{load_document, FixtureError};

const CANDIDATE_TOPIC_FILTERS: &[FilterParam] =
    &[FilterParam::equals("candidate_id"), FilterParam::equals("topic_id")];

/// One read-only route backed by one fixture file
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub path: &'static str,
    pub fixture: &'static str,
    /// Applied in order, combined with AND
    pub filters: &'static [FilterParam],
    /// Pass the fixture's `included` member through when it is non-empty
    pub include_related: bool,
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        path: "/topics",
        fixture: "topics.json",
        filters: &[],
        include_related: true,
    },
    Endpoint {
        path: "/claim-spaces",
        fixture: "claim_spaces.json",
        filters: &[],
        include_related: false,
    },
    Endpoint {
        path: "/consensus-priors",
        fixture: "consensus_priors.json",
        filters: &[FilterParam::equals("topic_id"), FilterParam::at_most("as_of")],
        include_related: false,
    },
    Endpoint {
        path: "/candidates",
        fixture: "candidates.json",
        filters: &[],
        include_related: false,
    },
    Endpoint {
        path: "/stance-estimates",
        fixture: "stance_estimates.json",
        filters: CANDIDATE_TOPIC_FILTERS,
        include_related: false,
    },
    Endpoint {
        path: "/score-snapshots",
        fixture: "score_snapshots.json",
        filters: CANDIDATE_TOPIC_FILTERS,
        include_related: false,
    },
    Endpoint {
        path: "/evidence-units",
        fixture: "evidence_units.json",
        filters: CANDIDATE_TOPIC_FILTERS,
        include_related: false,
    },
];

/// Look up the endpoint serving `path`
pub fn find_endpoint(path: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.path == path)
}

/// Paths of all endpoints, in table order
pub fn endpoint_paths() -> Vec<&'static str> {
    ENDPOINTS.iter().map(|e| e.path).collect()
}

/// API route handler
///
/// Dispatches to the fixture endpoint matching the request path
pub async fn handle_api_request(parts: &Parts, state: &AppState) -> Response<Full<Bytes>> {
    let path = parts.uri.path();

    let Some(endpoint) = find_endpoint(path) else {
        // `/topics/` -> `/topics`
        if let Some(endpoint) = path.strip_suffix('/').and_then(find_endpoint) {
            let location = match parts.uri.query() {
                Some(q) => format!("{}?{q}", endpoint.path),
                None => endpoint.path.to_string(),
            };
            return http::build_redirect_response(StatusCode::TEMPORARY_REDIRECT, &location);
        }
        return response::not_found();
    };

    if parts.method != Method::GET {
        return response::method_not_allowed();
    }

    let params = match QueryParams::parse(parts.uri.query()) {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!("Ignoring malformed query on {path}: {e}"));
            QueryParams::default()
        }
    };

    match list_resources(endpoint, &state.config.mock_api.seeds_dir, &params).await {
        Ok(doc) => response::document_response(&doc),
        Err(e) => {
            logger::log_error(&e.to_string());
            http::build_500_response()
        }
    }
}

/// Load an endpoint's fixture, filter it and build the response envelope
pub async fn list_resources(
    endpoint: &Endpoint,
    seeds_dir: &std::path::Path,
    params: &QueryParams,
) -> Result<ResourceDocument, FixtureError> {
    let doc = load_document(seeds_dir, endpoint.fixture).await?;

    let mut out = ResourceDocument::from_data(apply_filters(doc.data, endpoint.filters, params));
    if endpoint.include_related {
        out.included = doc.included.filter(is_present);
    }
    Ok(out)
}
