use std::future::Future;
use std::sync::Arc;

use anyhow::Result;

use crate::dispatcher::Dispatcher;
use crate::http_helpers::{HttpRequest, HttpResponse};

/// Conversion seam between a runtime listener's request/response types and
/// the dispatch layer's. Listener-specific types never leak past it.
pub trait RouteAdapter {
    type Request;
    type Response;

    fn adapt_request(request: Self::Request) -> impl Future<Output = Result<HttpRequest>> + Send;

    fn adapt_response(response: HttpResponse) -> Result<Self::Response>;

    fn handle_request(
        request: Self::Request,
        dispatcher: Arc<Dispatcher>,
    ) -> impl Future<Output = Result<Self::Response>> + Send
    where
        Self::Request: Send,
    {
        async move {
            let http_request = Self::adapt_request(request).await?;
            let http_response = dispatcher.dispatch(http_request).await;
            Self::adapt_response(http_response)
        }
    }
}
