use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::Result;

use crate::http_helpers::{HttpRequest, HttpResponse};

/// What a middleware decided to do with the request.
///
/// Returning `Respond` terminates the chain: the response is delivered
/// exactly as produced, and no later entry or route handler runs.
#[derive(Debug)]
pub enum Flow {
    /// Hand the (possibly modified) request to the next entry.
    Proceed(HttpRequest),
    /// Short-circuit the chain with a terminal response.
    Respond(HttpResponse),
}

/// Result type for a single middleware step. An `Err` aborts the chain and
/// lands in the dispatcher's error boundary.
pub type MiddlewareResult = Result<Flow>;

/// Core middleware trait
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, req: HttpRequest) -> MiddlewareResult;
}

/// Functional middleware - simpler alternative using closures
pub type MiddlewareFn =
    Arc<dyn Fn(HttpRequest) -> Pin<Box<dyn Future<Output = MiddlewareResult> + Send>> + Send + Sync>;

/// Wrapper to convert functional middleware to trait
pub struct FunctionalMiddleware {
    handler: MiddlewareFn,
}

impl FunctionalMiddleware {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = MiddlewareResult> + Send + 'static,
    {
        Self {
            handler: Arc::new(move |req| Box::pin(f(req))),
        }
    }
}

#[async_trait]
impl Middleware for FunctionalMiddleware {
    async fn handle(&self, req: HttpRequest) -> MiddlewareResult {
        (self.handler)(req).await
    }
}
