use async_trait::async_trait;

use crate::{
    http_helpers::{HttpMethod, HttpRequest, HttpResponse},
    traits_helpers::middleware::{Flow, Middleware, MiddlewareResult},
};

const DEFAULT_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";
const DEFAULT_HEADERS: &str = "Content-Type, Authorization";

/// Cross-origin configuration. Absent fields fall back to the documented
/// defaults: reflect the request `Origin`, `GET,HEAD,PUT,PATCH,POST,DELETE`,
/// `Content-Type, Authorization`.
///
/// Note the reflection default is deliberately permissive: with no `origin`
/// configured, any request origin is echoed back, credentials included if
/// `credentials` is also set. Configure a literal `origin` to pin it.
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub origin: Option<String>,
    pub methods: Option<Vec<HttpMethod>>,
    pub allowed_headers: Option<Vec<String>>,
    pub credentials: bool,
}

impl CorsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: &str) -> Self {
        self.origin = Some(origin.to_string());
        self
    }

    pub fn methods(mut self, methods: Vec<HttpMethod>) -> Self {
        self.methods = Some(methods);
        self
    }

    pub fn allowed_headers(mut self, headers: Vec<String>) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn credentials(mut self, allow: bool) -> Self {
        self.credentials = allow;
        self
    }
}

/// Outcome of CORS negotiation for one request.
#[derive(Debug)]
pub struct CorsNegotiation {
    /// Headers to carry on whatever response the pipeline produces.
    pub headers: Vec<(String, String)>,
    /// Terminal preflight response, when the request method is OPTIONS.
    pub preflight: Option<HttpResponse>,
}

/// Compute the CORS response headers and the preflight decision.
pub fn negotiate(config: &CorsConfig, req: &HttpRequest) -> CorsNegotiation {
    let mut headers = Vec::new();

    match &config.origin {
        Some(origin) => headers.push(("Access-Control-Allow-Origin".to_string(), origin.clone())),
        None => {
            if let Some(origin) = req.header("origin") {
                headers.push(("Access-Control-Allow-Origin".to_string(), origin.to_string()));
            }
        }
    }

    let methods = match &config.methods {
        Some(methods) => methods
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        None => DEFAULT_METHODS.to_string(),
    };
    headers.push(("Access-Control-Allow-Methods".to_string(), methods));

    let allowed = match &config.allowed_headers {
        Some(names) => names.join(", "),
        None => DEFAULT_HEADERS.to_string(),
    };
    headers.push(("Access-Control-Allow-Headers".to_string(), allowed));

    if config.credentials {
        headers.push((
            "Access-Control-Allow-Credentials".to_string(),
            "true".to_string(),
        ));
    }

    let preflight = (req.method == "OPTIONS").then(|| HttpResponse {
        status: 204,
        headers: headers.clone(),
        body: None,
    });

    CorsNegotiation { headers, preflight }
}

/// Chain entry that short-circuits preflight requests. Header attachment on
/// actual responses is the dispatcher's side of the negotiation.
pub struct CorsMiddleware {
    config: CorsConfig,
}

impl CorsMiddleware {
    pub fn new(config: CorsConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Middleware for CorsMiddleware {
    async fn handle(&self, req: HttpRequest) -> MiddlewareResult {
        match negotiate(&self.config, &req).preflight {
            Some(response) => Ok(Flow::Respond(response)),
            None => Ok(Flow::Proceed(req)),
        }
    }
}
