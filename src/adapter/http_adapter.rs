use std::future::Future;
use std::sync::Arc;

use anyhow::Result;

use crate::dispatcher::Dispatcher;

/// A runtime listener that owns the sockets and feeds every inbound request
/// to a fully-populated dispatcher. Registration must be complete before
/// `listen`: binding takes the dispatcher behind an `Arc`.
pub trait HttpAdapter: Send + Sized {
    fn bind(dispatcher: Arc<Dispatcher>) -> Self;

    fn listen(self, port: u16, hostname: &str) -> impl Future<Output = Result<()>> + Send;
}
