use super::Body;

/// An immutable response value. A response handed to the transport layer may
/// already be partially serialized, so every mutation helper returns a fresh
/// value instead of touching the original.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: vec![],
            body: None,
        }
    }

    /// An empty-bodied response pointing the client at `location`.
    pub fn redirect(status: u16, location: &str) -> Self {
        Self {
            status,
            headers: vec![("Location".to_string(), location.to_string())],
            body: None,
        }
    }

    /// Get a header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn with_status(&self, status: u16) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn with_body(&self, body: Body) -> Self {
        Self {
            body: Some(body),
            ..self.clone()
        }
    }

    /// Set a header, replacing any existing value under the same
    /// (case-insensitive) name. The first occurrence keeps its position;
    /// stray duplicates are dropped.
    pub fn with_header(&self, name: &str, value: &str) -> Self {
        let mut next = self.clone();
        let mut replaced = false;
        next.headers.retain_mut(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                if replaced {
                    return false;
                }
                *v = value.to_string();
                replaced = true;
            }
            true
        });
        if !replaced {
            next.headers.push((name.to_string(), value.to_string()));
        }
        next
    }

    /// Append to a header, comma-joining with any existing value under the
    /// same (case-insensitive) name.
    pub fn with_appended_header(&self, name: &str, value: &str) -> Self {
        let mut next = self.clone();
        match next
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = format!("{existing}, {value}"),
            None => next.headers.push((name.to_string(), value.to_string())),
        }
        next
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}
