use anyhow::{Result, anyhow};
use axum::{
    body::to_bytes,
    http::{HeaderMap, HeaderName, HeaderValue, Request, Response, StatusCode},
};
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::http_helpers::{Body, HttpRequest, HttpResponse};

use super::RouteAdapter;

pub struct AxumRouteAdapter;

impl RouteAdapter for AxumRouteAdapter {
    type Request = Request<axum::body::Body>;
    type Response = Response<axum::body::Body>;

    async fn adapt_request(request: Self::Request) -> Result<HttpRequest> {
        let (parts, body) = request.into_parts();
        let body_bytes = to_bytes(body, usize::MAX).await?;
        let bytes = body_bytes.to_vec();

        let body = if let Ok(body_str) = String::from_utf8(bytes) {
            if let Ok(json) = serde_json::from_str::<Value>(&body_str) {
                Body::Json(json)
            } else {
                Body::Text(body_str)
            }
        } else {
            Body::Binary(body_bytes.to_vec())
        };

        let query_params: FxHashMap<String, String> = match parts.uri.query() {
            Some(query) => serde_urlencoded::from_str(query)
                .map_err(|e| anyhow!("Failed to parse query parameters: {:?}", e))?,
            None => FxHashMap::default(),
        };

        let headers = parts
            .headers
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_str().unwrap_or("").to_string()))
            .collect();

        Ok(HttpRequest {
            body,
            headers,
            method: parts.method.to_string(),
            uri: parts.uri.to_string(),
            query_params,
            // Bound later, by route lookup.
            path_params: FxHashMap::default(),
        })
    }

    fn adapt_response(response: HttpResponse) -> Result<Self::Response> {
        let status =
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let (body, default_content_type) = match &response.body {
            Some(Body::Text(text)) => (axum::body::Body::from(text.clone()), "text/plain"),
            Some(Body::Json(json)) => {
                let vec = serde_json::to_vec(json)
                    .map_err(|e| anyhow!("Failed to serialize JSON: {}", e))?;
                (axum::body::Body::from(vec), "application/json")
            }
            Some(Body::Binary(bytes)) => (
                axum::body::Body::from(bytes.clone()),
                "application/octet-stream",
            ),
            None => (axum::body::Body::empty(), "text/plain"),
        };

        let mut headers = HeaderMap::new();
        for (k, v) in &response.headers {
            if let Ok(header_name) = HeaderName::from_bytes(k.as_bytes()) {
                if let Ok(header_value) = HeaderValue::from_str(v) {
                    headers.append(header_name, header_value);
                }
            }
        }
        if response.body.is_some() && !headers.contains_key("content-type") {
            headers.insert(
                HeaderName::from_static("content-type"),
                HeaderValue::from_static(default_content_type),
            );
        }

        let mut res = Response::builder()
            .status(status)
            .body(body)
            .map_err(|e| anyhow!("Failed to build response: {}", e))?;

        res.headers_mut().extend(headers);

        Ok(res)
    }
}
