use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::{Error, Result};

use crate::http_helpers::{HttpRequest, HttpResponse};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// A route handler capability: consumes the matched request (path parameters
/// already bound) and completes with a response, or a fault for the
/// dispatcher's error boundary.
pub type RouteHandler =
    Arc<dyn Fn(HttpRequest) -> BoxFuture<Result<HttpResponse>> + Send + Sync>;

/// Invoked with the fault and the in-flight request when anything in the
/// pipeline errors.
pub type ErrorHandler =
    Arc<dyn Fn(Error, HttpRequest) -> BoxFuture<HttpResponse> + Send + Sync>;

/// Invoked when no route binding matches the request.
pub type NotFoundHandler = Arc<dyn Fn(HttpRequest) -> BoxFuture<HttpResponse> + Send + Sync>;
