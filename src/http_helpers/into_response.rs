use std::fmt::Debug;

use serde_json::Value;

use super::{Body, HttpResponse};

pub trait IntoResponse: Debug {
    type Response;

    fn to_response(&self) -> Self::Response;
}

impl IntoResponse for HttpResponse {
    type Response = Self;

    fn to_response(&self) -> Self {
        self.clone()
    }
}

impl IntoResponse for Body {
    type Response = HttpResponse;

    fn to_response(&self) -> Self::Response {
        HttpResponse {
            body: Some(self.clone()),
            ..HttpResponse::new()
        }
    }
}

impl IntoResponse for u16 {
    type Response = HttpResponse;

    fn to_response(&self) -> Self::Response {
        HttpResponse {
            status: *self,
            ..HttpResponse::new()
        }
    }
}

impl IntoResponse for (u16, Body) {
    type Response = HttpResponse;

    fn to_response(&self) -> Self::Response {
        HttpResponse {
            body: Some(self.1.clone()),
            status: self.0,
            ..HttpResponse::new()
        }
    }
}

impl IntoResponse for Value {
    type Response = HttpResponse;

    fn to_response(&self) -> Self::Response {
        HttpResponse {
            body: Some(Body::Json(self.clone())),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            ..HttpResponse::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_body_pair() {
        let resp = (404u16, Body::Text("Not Found".to_string())).to_response();
        assert_eq!(resp.status, 404);
        assert_eq!(resp.body, Some(Body::Text("Not Found".to_string())));
    }

    #[test]
    fn test_json_value_sets_content_type() {
        let resp = json!({"ok": true}).to_response();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.header("Content-Type"), Some("application/json"));
        assert_eq!(resp.body, Some(Body::Json(json!({"ok": true}))));
    }
}
