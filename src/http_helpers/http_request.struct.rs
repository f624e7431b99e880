use rustc_hash::FxHashMap;

use super::Body;

#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub body: Body,
    pub headers: Vec<(String, String)>,
    pub method: String,
    pub uri: String,
    pub query_params: FxHashMap<String, String>,
    pub path_params: FxHashMap<String, String>,
}

impl HttpRequest {
    /// Get a reference to the headers
    pub fn headers(&self) -> &Vec<(String, String)> {
        &self.headers
    }

    /// Get a mutable reference to the headers
    pub fn headers_mut(&mut self) -> &mut Vec<(String, String)> {
        &mut self.headers
    }

    /// Get a specific header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if a header exists
    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// The request path: the uri with any query string stripped.
    pub fn path(&self) -> &str {
        match self.uri.find('?') {
            Some(idx) => &self.uri[..idx],
            None => &self.uri,
        }
    }

    /// Hostname from the `Host` header, without the port.
    pub fn hostname(&self) -> &str {
        self.header("host")
            .and_then(|h| h.split(':').next())
            .unwrap_or("localhost")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_headers(headers: Vec<(String, String)>) -> HttpRequest {
        HttpRequest {
            body: Body::Text(String::new()),
            headers,
            method: "GET".to_string(),
            uri: "/things?page=2".to_string(),
            query_params: FxHashMap::default(),
            path_params: FxHashMap::default(),
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = request_with_headers(vec![(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
        assert!(req.has_header("content-TYPE"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn test_path_strips_query_string() {
        let req = request_with_headers(vec![]);
        assert_eq!(req.path(), "/things");
    }

    #[test]
    fn test_hostname_drops_port_and_defaults() {
        let req = request_with_headers(vec![("Host".to_string(), "api.test:8080".to_string())]);
        assert_eq!(req.hostname(), "api.test");

        let bare = request_with_headers(vec![]);
        assert_eq!(bare.hostname(), "localhost");
    }
}
