use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Error, Result};

use crate::{
    http_helpers::{Body, HttpMethod, HttpRequest, HttpResponse, IntoResponse},
    middleware::{
        ChainOutcome, CorsConfig, CorsMiddleware, MiddlewareChain, StaticAssets, cors,
    },
    router::RouteTable,
    traits_helpers::{ErrorHandler, NotFoundHandler, RouteHandler, middleware::Middleware},
};

/// The request-dispatch context: route table, middleware chain, CORS state
/// and fallback handlers, owned by one value and passed explicitly to the
/// listener adapter.
///
/// Registration happens through `&mut self` during bootstrap; serving takes
/// the dispatcher behind an `Arc`, so mutation after the listener starts is
/// unrepresentable rather than merely discouraged.
pub struct Dispatcher {
    routes: RouteTable,
    chain: MiddlewareChain,
    cors: Option<CorsConfig>,
    error_handler: Option<ErrorHandler>,
    not_found_handler: Option<NotFoundHandler>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            routes: RouteTable::new(),
            chain: MiddlewareChain::new(),
            cors: None,
            error_handler: None,
            not_found_handler: None,
        }
    }

    pub fn add_route<F, Fut>(&mut self, method: HttpMethod, pattern: &str, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
    {
        self.routes.register(method, pattern, boxed(handler));
    }

    pub fn get<F, Fut>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
    {
        self.add_route(HttpMethod::GET, pattern, handler);
    }

    pub fn post<F, Fut>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
    {
        self.add_route(HttpMethod::POST, pattern, handler);
    }

    pub fn put<F, Fut>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
    {
        self.add_route(HttpMethod::PUT, pattern, handler);
    }

    pub fn patch<F, Fut>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
    {
        self.add_route(HttpMethod::PATCH, pattern, handler);
    }

    pub fn delete<F, Fut>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
    {
        self.add_route(HttpMethod::DELETE, pattern, handler);
    }

    pub fn head<F, Fut>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
    {
        self.add_route(HttpMethod::HEAD, pattern, handler);
    }

    pub fn options<F, Fut>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
    {
        self.add_route(HttpMethod::OPTIONS, pattern, handler);
    }

    /// Register the handler once per concrete method.
    pub fn all<F, Fut>(&mut self, pattern: &str, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
    {
        self.add_route(HttpMethod::ALL, pattern, handler);
    }

    pub fn use_middleware(&mut self, middleware: Arc<dyn Middleware>) {
        self.chain.use_middleware(middleware);
    }

    /// Register middleware that only runs for request paths starting with
    /// `path_prefix`; other paths proceed past it with no side effect.
    pub fn use_middleware_at(&mut self, path_prefix: &str, middleware: Arc<dyn Middleware>) {
        self.chain.use_middleware_at(path_prefix, middleware);
    }

    /// Install CORS at the current position in the middleware chain and
    /// record the config so the negotiated headers ride on every response.
    pub fn enable_cors(&mut self, config: CorsConfig) {
        self.chain
            .use_middleware(Arc::new(CorsMiddleware::new(config.clone())));
        self.cors = Some(config);
    }

    /// Serve files under `root` for request paths under `url_prefix`.
    pub fn use_static_assets(&mut self, url_prefix: &str, root: impl Into<PathBuf>) {
        self.chain
            .use_middleware_at(url_prefix, Arc::new(StaticAssets::new(url_prefix, root)));
    }

    pub fn set_error_handler<F, Fut>(&mut self, handler: F)
    where
        F: Fn(Error, HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResponse> + Send + 'static,
    {
        self.error_handler = Some(Arc::new(move |err, req| Box::pin(handler(err, req))));
    }

    pub fn set_not_found_handler<F, Fut>(&mut self, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResponse> + Send + 'static,
    {
        self.not_found_handler = Some(Arc::new(move |req| Box::pin(handler(req))));
    }

    /// Drive one request through middleware, route lookup and the handler,
    /// falling back to the not-found or error path. Always produces exactly
    /// one response; no state survives the call.
    pub async fn dispatch(&self, req: HttpRequest) -> HttpResponse {
        let cors_headers = self
            .cors
            .as_ref()
            .map(|config| cors::negotiate(config, &req).headers);
        // The error boundary reports the request as it arrived.
        let inbound = req.clone();

        let response = match self.run_pipeline(req).await {
            Ok(response) => response,
            Err(fault) => self.fault_response(fault, inbound).await,
        };

        match cors_headers {
            Some(headers) => headers
                .iter()
                .fold(response, |resp, (name, value)| resp.with_header(name, value)),
            None => response,
        }
    }

    async fn run_pipeline(&self, req: HttpRequest) -> Result<HttpResponse> {
        let req = match self.chain.run(req).await? {
            ChainOutcome::ShortCircuit(response) => return Ok(response),
            ChainOutcome::Proceed(req) => req,
        };

        let matched = HttpMethod::from_string(&req.method)
            .and_then(|method| self.routes.lookup(method, req.path()));

        match matched {
            Some((handler, params)) => {
                let mut req = req;
                req.path_params = params;
                handler(req).await
            }
            None => Ok(self.not_found_response(req).await),
        }
    }

    async fn not_found_response(&self, req: HttpRequest) -> HttpResponse {
        match &self.not_found_handler {
            Some(handler) => handler(req).await,
            None => (404u16, Body::Text("Not Found".to_string())).to_response(),
        }
    }

    /// The default body is fixed and generic: fault detail only reaches a
    /// client through a custom error handler.
    async fn fault_response(&self, fault: Error, req: HttpRequest) -> HttpResponse {
        match &self.error_handler {
            Some(handler) => handler(fault, req).await,
            None => (500u16, Body::Text("Internal Server Error".to_string())).to_response(),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn boxed<F, Fut>(handler: F) -> RouteHandler
where
    F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HttpResponse>> + Send + 'static,
{
    Arc::new(move |req| Box::pin(handler(req)))
}
