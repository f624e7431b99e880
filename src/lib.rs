pub mod adapter;
mod dispatcher;
pub mod http_helpers;
pub mod middleware;
pub mod router;
pub mod traits_helpers;

// Re-exports for adapter crates and applications
pub use adapter::{AxumAdapter, AxumRouteAdapter, HttpAdapter, RouteAdapter};
pub use dispatcher::Dispatcher;
pub use http_helpers::{Body, HttpMethod, HttpRequest, HttpResponse, IntoResponse};
pub use middleware::{CorsConfig, LoggerMiddleware, StaticAssets};
pub use router::{PathPattern, RouteTable};
pub use traits_helpers::middleware::{Flow, FunctionalMiddleware, Middleware, MiddlewareResult};

// Re-export dependencies used by downstream middleware implementations
pub use async_trait::async_trait;
pub use rustc_hash::FxHashMap;

#[cfg(test)]
pub(crate) fn test_request(method: &str, uri: &str) -> HttpRequest {
    HttpRequest {
        body: Body::Text(String::new()),
        headers: vec![],
        method: method.to_string(),
        uri: uri.to_string(),
        query_params: FxHashMap::default(),
        path_params: FxHashMap::default(),
    }
}
