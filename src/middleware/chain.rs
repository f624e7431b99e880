use std::sync::Arc;

use anyhow::Result;

use crate::{
    http_helpers::{HttpRequest, HttpResponse},
    traits_helpers::middleware::{Flow, Middleware},
};

struct MiddlewareEntry {
    /// Entries with a prefix filter auto-proceed when the request path does
    /// not start with it.
    path_prefix: Option<String>,
    middleware: Arc<dyn Middleware>,
}

/// How a full chain run ended.
#[derive(Debug)]
pub enum ChainOutcome {
    /// Every entry proceeded; the request continues to route lookup.
    Proceed(HttpRequest),
    /// An entry produced a terminal response; nothing after it ran.
    ShortCircuit(HttpResponse),
}

/// Ordered middleware entries, executed by an explicit trampoline.
///
/// The loop holds the current index instead of recursing through
/// continuations, so stack depth stays bounded by one frame regardless of
/// chain length and a short-circuit response can never be silently dropped.
pub struct MiddlewareChain {
    entries: Vec<MiddlewareEntry>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn use_middleware(&mut self, middleware: Arc<dyn Middleware>) {
        self.entries.push(MiddlewareEntry {
            path_prefix: None,
            middleware,
        });
    }

    pub fn use_middleware_at(&mut self, path_prefix: &str, middleware: Arc<dyn Middleware>) {
        self.entries.push(MiddlewareEntry {
            path_prefix: Some(path_prefix.to_string()),
            middleware,
        });
    }

    /// Run the entries strictly in registration order. An `Err` from any
    /// entry aborts the run; entries after it do not execute.
    pub async fn run(&self, req: HttpRequest) -> Result<ChainOutcome> {
        let mut req = req;
        for entry in &self.entries {
            if let Some(prefix) = &entry.path_prefix {
                if !req.path().starts_with(prefix.as_str()) {
                    continue;
                }
            }
            match entry.middleware.handle(req).await? {
                Flow::Proceed(next_req) => req = next_req,
                Flow::Respond(response) => return Ok(ChainOutcome::ShortCircuit(response)),
            }
        }
        Ok(ChainOutcome::Proceed(req))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MiddlewareChain {
    fn default() -> Self {
        Self::new()
    }
}
