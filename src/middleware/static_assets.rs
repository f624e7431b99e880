use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{
    http_helpers::{Body, HttpRequest, HttpResponse},
    traits_helpers::middleware::{Flow, Middleware, MiddlewareResult},
};

/// Serves files under a filesystem root for requests under a URL prefix.
///
/// The prefix is stripped from the request path to form the candidate file
/// path. Any failure along the way (missing file, unreadable file, traversal
/// attempt) falls through to the next middleware; static lookup never fails
/// a request.
pub struct StaticAssets {
    url_prefix: String,
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(url_prefix: &str, root: impl Into<PathBuf>) -> Self {
        Self {
            url_prefix: url_prefix.to_string(),
            root: root.into(),
        }
    }

    async fn serve(&self, suffix: &str) -> Option<HttpResponse> {
        let relative = suffix.trim_start_matches('/');
        if relative.is_empty() || relative.split('/').any(|part| part == "..") {
            return None;
        }
        let path = self.root.join(relative);
        // read() also covers the existence check: directories and missing
        // files both error out into the fall-through.
        let bytes = tokio::fs::read(&path).await.ok()?;
        Some(HttpResponse {
            status: 200,
            headers: vec![(
                "Content-Type".to_string(),
                content_type(&path).to_string(),
            )],
            body: Some(Body::Binary(bytes)),
        })
    }
}

#[async_trait]
impl Middleware for StaticAssets {
    async fn handle(&self, req: HttpRequest) -> MiddlewareResult {
        if let Some(suffix) = req.path().strip_prefix(self.url_prefix.as_str()) {
            if let Some(response) = self.serve(suffix).await {
                return Ok(Flow::Respond(response));
            }
        }
        Ok(Flow::Proceed(req))
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("txt") => "text/plain",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
