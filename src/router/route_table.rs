use rustc_hash::FxHashMap;

use crate::http_helpers::HttpMethod;
use crate::traits_helpers::RouteHandler;

use super::path_pattern::PathPattern;

struct LiteralBinding {
    handler: RouteHandler,
    seq: usize,
}

struct PatternBinding {
    pattern: PathPattern,
    handler: RouteHandler,
    seq: usize,
}

/// Method -> pattern -> handler bindings.
///
/// Bindings are grouped per method into a literal-exact bucket and a
/// registration-ordered parameterized bucket. Overall lookup semantics are
/// first-registered-match-wins: every binding carries its registration
/// sequence number, and a literal-exact hit is returned only when no
/// earlier-registered parameterized pattern also matches the path. A
/// parameterized pattern registered before a literal one therefore shadows
/// it for paths both match.
pub struct RouteTable {
    literal: FxHashMap<HttpMethod, FxHashMap<String, LiteralBinding>>,
    patterned: FxHashMap<HttpMethod, Vec<PatternBinding>>,
    next_seq: usize,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            literal: FxHashMap::default(),
            patterned: FxHashMap::default(),
            next_seq: 0,
        }
    }

    /// Register a handler under (method, pattern). Never fails: re-registering
    /// the same key replaces the previous handler in place, keeping its
    /// original registration position. `HttpMethod::ALL` expands into one
    /// binding per concrete method.
    pub fn register(&mut self, method: HttpMethod, pattern: &str, handler: RouteHandler) {
        if method == HttpMethod::ALL {
            for concrete in HttpMethod::CONCRETE {
                self.register(concrete, pattern, handler.clone());
            }
            return;
        }

        let pattern = PathPattern::parse(pattern);
        if pattern.is_literal() {
            let bucket = self.literal.entry(method).or_default();
            match bucket.get_mut(pattern.raw()) {
                Some(binding) => binding.handler = handler,
                None => {
                    let seq = self.next_seq;
                    self.next_seq += 1;
                    bucket.insert(pattern.raw().to_string(), LiteralBinding { handler, seq });
                }
            }
        } else {
            let bucket = self.patterned.entry(method).or_default();
            match bucket.iter_mut().find(|b| b.pattern.raw() == pattern.raw()) {
                Some(binding) => binding.handler = handler,
                None => {
                    let seq = self.next_seq;
                    self.next_seq += 1;
                    bucket.push(PatternBinding {
                        pattern,
                        handler,
                        seq,
                    });
                }
            }
        }
    }

    /// Find the handler for (method, path), with bound path parameters.
    pub fn lookup(
        &self,
        method: HttpMethod,
        path: &str,
    ) -> Option<(RouteHandler, FxHashMap<String, String>)> {
        let literal = self.literal.get(&method).and_then(|b| b.get(path));
        let patterned = self.patterned.get(&method).and_then(|bucket| {
            bucket
                .iter()
                .find_map(|b| b.pattern.match_path(path).map(|params| (b, params)))
        });

        match (literal, patterned) {
            (Some(lit), Some((pat, _))) if lit.seq < pat.seq => {
                Some((lit.handler.clone(), FxHashMap::default()))
            }
            (_, Some((pat, params))) => Some((pat.handler.clone(), params)),
            (Some(lit), None) => Some((lit.handler.clone(), FxHashMap::default())),
            (None, None) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.literal.values().all(|b| b.is_empty()) && self.patterned.values().all(|b| b.is_empty())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::http_helpers::{Body, IntoResponse};

    use super::*;

    fn tagged(tag: &str) -> RouteHandler {
        let tag = tag.to_string();
        Arc::new(move |_req| {
            let tag = tag.clone();
            Box::pin(async move { Ok(Body::Text(tag).to_response()) })
        })
    }

    async fn tag_of(table: &RouteTable, method: HttpMethod, path: &str) -> Option<String> {
        let (handler, params) = table.lookup(method, path)?;
        let mut req = crate::test_request(method.as_str(), path);
        req.path_params = params;
        match handler(req).await.unwrap().body {
            Some(Body::Text(tag)) => Some(tag),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_literal_lookup() {
        let mut table = RouteTable::new();
        table.register(HttpMethod::GET, "/health", tagged("health"));

        assert_eq!(
            tag_of(&table, HttpMethod::GET, "/health").await.as_deref(),
            Some("health")
        );
        assert!(table.lookup(HttpMethod::POST, "/health").is_none());
        assert!(table.lookup(HttpMethod::GET, "/nope").is_none());
    }

    #[tokio::test]
    async fn test_parameterized_lookup_binds_params() {
        let mut table = RouteTable::new();
        table.register(HttpMethod::GET, "/users/:id", tagged("user"));

        let (_, params) = table.lookup(HttpMethod::GET, "/users/42").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
        assert!(table.lookup(HttpMethod::GET, "/users/42/edit").is_none());
    }

    #[tokio::test]
    async fn test_earlier_parameterized_pattern_shadows_later_literal() {
        let mut table = RouteTable::new();
        table.register(HttpMethod::GET, "/users/:id", tagged("param"));
        table.register(HttpMethod::GET, "/users/me", tagged("literal"));

        // First-registered-match-wins: the parameterized binding predates the
        // literal one and matches the same concrete path.
        assert_eq!(
            tag_of(&table, HttpMethod::GET, "/users/me").await.as_deref(),
            Some("param")
        );
        // A path only the literal could never claim still resolves normally.
        assert_eq!(
            tag_of(&table, HttpMethod::GET, "/users/42").await.as_deref(),
            Some("param")
        );
    }

    #[tokio::test]
    async fn test_earlier_literal_beats_later_parameterized_pattern() {
        let mut table = RouteTable::new();
        table.register(HttpMethod::GET, "/users/me", tagged("literal"));
        table.register(HttpMethod::GET, "/users/:id", tagged("param"));

        assert_eq!(
            tag_of(&table, HttpMethod::GET, "/users/me").await.as_deref(),
            Some("literal")
        );
        assert_eq!(
            tag_of(&table, HttpMethod::GET, "/users/42").await.as_deref(),
            Some("param")
        );
    }

    #[tokio::test]
    async fn test_literal_wins_when_earlier_parameterized_does_not_match() {
        let mut table = RouteTable::new();
        table.register(HttpMethod::GET, "/posts/:id", tagged("posts"));
        table.register(HttpMethod::GET, "/users/me", tagged("me"));

        assert_eq!(
            tag_of(&table, HttpMethod::GET, "/users/me").await.as_deref(),
            Some("me")
        );
    }

    #[tokio::test]
    async fn test_reregistration_overwrites_in_place() {
        let mut table = RouteTable::new();
        table.register(HttpMethod::GET, "/users/:id", tagged("old"));
        table.register(HttpMethod::GET, "/users/me", tagged("literal"));
        table.register(HttpMethod::GET, "/users/:id", tagged("new"));

        // The overwrite keeps the original registration position, so the
        // parameterized binding still predates the literal one.
        assert_eq!(
            tag_of(&table, HttpMethod::GET, "/users/me").await.as_deref(),
            Some("new")
        );
    }

    #[tokio::test]
    async fn test_all_expands_per_concrete_method() {
        let mut table = RouteTable::new();
        table.register(HttpMethod::ALL, "/anything", tagged("any"));

        for method in HttpMethod::CONCRETE {
            assert_eq!(
                tag_of(&table, method, "/anything").await.as_deref(),
                Some("any")
            );
        }
        assert!(table.lookup(HttpMethod::ALL, "/anything").is_none());
    }

    #[tokio::test]
    async fn test_parameterized_bucket_scans_in_registration_order() {
        let mut table = RouteTable::new();
        table.register(HttpMethod::GET, "/:a/x", tagged("first"));
        table.register(HttpMethod::GET, "/:b/x", tagged("second"));

        assert_eq!(
            tag_of(&table, HttpMethod::GET, "/anything/x").await.as_deref(),
            Some("first")
        );
    }
}
