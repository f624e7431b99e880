use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, body::Body, http::Request};
use tokio::net::TcpListener;

use crate::dispatcher::Dispatcher;

use super::{AxumRouteAdapter, HttpAdapter, RouteAdapter};

/// Axum-backed listener. Axum owns the sockets and HTTP parsing; every
/// request funnels through a single fallback into the dispatcher, which owns
/// routing, middleware and CORS.
#[derive(Clone)]
pub struct AxumAdapter {
    dispatcher: Arc<Dispatcher>,
}

impl HttpAdapter for AxumAdapter {
    fn bind(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    async fn listen(self, port: u16, hostname: &str) -> Result<()> {
        let dispatcher = self.dispatcher;
        let app = Router::new().fallback(move |req: Request<Body>| {
            let dispatcher = dispatcher.clone();
            async move {
                AxumRouteAdapter::handle_request(req, dispatcher)
                    .await
                    .unwrap_or_else(|_| {
                        // Request adaption failed before the dispatcher's
                        // error boundary could answer.
                        axum::http::Response::builder()
                            .status(500)
                            .body(Body::from("Internal Server Error"))
                            .expect("static response")
                    })
            }
        });

        let addr = format!("{}:{}", hostname, port);
        let listener: TcpListener = TcpListener::bind(&addr).await?;

        println!("Listening on {}", addr);

        axum::serve(listener, app)
            .await
            .with_context(|| "Axum server encountered an error")?;
        Ok(())
    }
}
