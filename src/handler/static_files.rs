//! Static file serving module
//!
//! Maps request paths onto the served root, then answers with a file, an index
//! file, a directory listing or a trailing-slash redirect.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Characters left unescaped in listing links
const LINK_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Outcome of mapping a request path onto the filesystem
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    File(PathBuf),
    Directory(PathBuf),
    /// A directory was requested without the trailing slash
    RedirectToSlash,
    NotFound,
}

/// Serve whatever the request path resolves to under `root`
pub async fn serve_path(
    ctx: &RequestContext<'_>,
    root: &Path,
    index_files: &[String],
) -> Response<Full<Bytes>> {
    match resolve(root, ctx.path, index_files).await {
        Resolved::File(path) => serve_file(ctx, &path).await,
        Resolved::Directory(dir) => serve_listing(ctx, &dir).await,
        Resolved::RedirectToSlash => {
            let location = slash_redirect_location(ctx.path, ctx.query);
            http::build_redirect_response(StatusCode::MOVED_PERMANENTLY, &location)
        }
        Resolved::NotFound => http::build_404_response(),
    }
}

/// `Location` for a directory requested without its trailing slash
///
/// Leading slashes collapse to one; `//host/dir/` would otherwise be read as a
/// scheme-relative URL pointing at another host.
fn slash_redirect_location(path: &str, query: Option<&str>) -> String {
    let path = format!("/{}/", path.trim_start_matches('/'));
    match query {
        Some(q) => format!("{path}?{q}"),
        None => path,
    }
}

/// Resolve a raw (percent-encoded) request path against `root`
pub async fn resolve(root: &Path, request_path: &str, index_files: &[String]) -> Resolved {
    let decoded = percent_decode_str(request_path).decode_utf8_lossy();

    let mut candidate = root.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => return Resolved::NotFound,
            s if s.contains('\\') || s.contains('\0') => return Resolved::NotFound,
            s => candidate.push(s),
        }
    }

    let root_canonical = match fs::canonicalize(root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{}': {e}",
                root.display()
            ));
            return Resolved::NotFound;
        }
    };

    // Missing files are the common case, not worth a log line
    let Ok(canonical) = fs::canonicalize(&candidate).await else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    let Ok(metadata) = fs::metadata(&canonical).await else {
        return Resolved::NotFound;
    };

    let wants_directory = request_path.ends_with('/');
    if metadata.is_dir() {
        if !wants_directory {
            return Resolved::RedirectToSlash;
        }
        for index_file in index_files {
            let index_path = canonical.join(index_file);
            if fs::metadata(&index_path).await.is_ok_and(|m| m.is_file()) {
                return Resolved::File(index_path);
            }
        }
        return Resolved::Directory(canonical);
    }

    if wants_directory {
        return Resolved::NotFound;
    }
    Resolved::File(canonical)
}

/// Serve a single file with `ETag` / `Last-Modified` validation
pub async fn serve_file(ctx: &RequestContext<'_>, path: &Path) -> Response<Full<Bytes>> {
    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            return http::build_404_response();
        }
    };
    let modified = fs::metadata(path).await.and_then(|m| m.modified()).ok();

    let etag = cache::generate_etag(&content);
    let last_modified = modified.map(cache::format_http_date);

    if cache::check_etag_match(ctx.if_none_match, &etag) {
        return http::build_304_response(&etag, last_modified.as_deref());
    }
    // If-Modified-Since only counts when no entity tag was offered
    if ctx.if_none_match.is_none() {
        if let Some(modified) = modified {
            if cache::not_modified_since(ctx.if_modified_since, modified) {
                return http::build_304_response(&etag, last_modified.as_deref());
            }
        }
    }

    http::build_file_response(
        Bytes::from(content),
        mime::content_type_for(path),
        &etag,
        last_modified.as_deref(),
        ctx.is_head,
    )
}

/// Render an HTML listing of `dir`
async fn serve_listing(ctx: &RequestContext<'_>, dir: &Path) -> Response<Full<Bytes>> {
    let mut reader = match fs::read_dir(dir).await {
        Ok(r) => r,
        Err(e) => {
            logger::log_warning(&format!("Cannot list directory '{}': {e}", dir.display()));
            return http::build_404_response();
        }
    };

    let mut entries = Vec::new();
    loop {
        match reader.next_entry().await {
            Ok(Some(entry)) => {
                let name = entry.file_name().to_string_lossy().into_owned();
                let is_dir = entry.file_type().await.is_ok_and(|t| t.is_dir());
                entries.push((name, is_dir));
            }
            Ok(None) => break,
            Err(e) => {
                logger::log_warning(&format!("Cannot list directory '{}': {e}", dir.display()));
                return http::build_404_response();
            }
        }
    }

    let display_path = percent_decode_str(ctx.path).decode_utf8_lossy();
    http::build_html_response(render_listing(&display_path, entries), ctx.is_head)
}

/// Build the listing page; entries are sorted case-insensitively
pub fn render_listing(display_path: &str, mut entries: Vec<(String, bool)>) -> String {
    entries.sort_by_key(|(name, _)| name.to_lowercase());

    let title = format!("Directory listing for {}", escape_html(display_path));
    let mut html = format!(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n"
    );
    for (name, is_dir) in entries {
        let suffix = if is_dir { "/" } else { "" };
        let href = utf8_percent_encode(&name, LINK_SAFE);
        let _ = writeln!(
            html,
            "<li><a href=\"{href}{suffix}\">{}{suffix}</a></li>",
            escape_html(&name)
        );
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
