use async_trait::async_trait;

use crate::{
    http_helpers::HttpRequest,
    traits_helpers::middleware::{Flow, Middleware, MiddlewareResult},
};

/// Logging middleware - prints a line per inbound request.
pub struct LoggerMiddleware;

impl LoggerMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggerMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Middleware for LoggerMiddleware {
    async fn handle(&self, req: HttpRequest) -> MiddlewareResult {
        println!("{} {}", req.method, req.uri);
        Ok(Flow::Proceed(req))
    }
}
