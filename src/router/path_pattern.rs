use rustc_hash::FxHashMap;

/// One `/`-delimited piece of a registered path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// A registered path template with optional `:name` parameter segments.
///
/// Patterns are compared structurally once parameters are involved; the raw
/// string is kept as the registration identity for overwrite semantics.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('/')
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Match a concrete path against this pattern, binding parameters.
    ///
    /// A pattern without parameters only ever matches by exact string
    /// equality; no trailing-slash normalization happens anywhere. A
    /// parameter segment binds any non-empty path segment, raw.
    pub fn match_path(&self, path: &str) -> Option<FxHashMap<String, String>> {
        if self.is_literal() {
            return (self.raw == path).then(FxHashMap::default);
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = FxHashMap::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_binding() {
        let pattern = PathPattern::parse("/users/:id");
        let params = pattern.match_path("/users/42").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_segment_count_mismatch_fails() {
        let pattern = PathPattern::parse("/users/:id");
        assert!(pattern.match_path("/users/42/edit").is_none());
        assert!(pattern.match_path("/users").is_none());
    }

    #[test]
    fn test_literal_pattern_matches_by_exact_equality_only() {
        let pattern = PathPattern::parse("/health");
        assert!(pattern.match_path("/health").is_some());
        assert!(pattern.match_path("/health/").is_none());
        assert!(pattern.match_path("/Health").is_none());
    }

    #[test]
    fn test_root_pattern_vs_empty_path() {
        let pattern = PathPattern::parse("/");
        assert!(pattern.match_path("/").is_some());
        assert!(pattern.match_path("").is_none());
    }

    #[test]
    fn test_multiple_parameters_bind_independently() {
        let pattern = PathPattern::parse("/orgs/:org/repos/:repo");
        let params = pattern.match_path("/orgs/acme/repos/site").unwrap();
        assert_eq!(params.get("org").map(String::as_str), Some("acme"));
        assert_eq!(params.get("repo").map(String::as_str), Some("site"));
    }

    #[test]
    fn test_parameter_rejects_empty_segment() {
        let pattern = PathPattern::parse("/users/:id");
        assert!(pattern.match_path("/users/").is_none());
    }

    #[test]
    fn test_literal_segments_are_case_sensitive() {
        let pattern = PathPattern::parse("/users/:id/posts");
        assert!(pattern.match_path("/users/1/Posts").is_none());
        assert!(pattern.match_path("/users/1/posts").is_some());
    }

    #[test]
    fn test_no_type_coercion_on_bound_values() {
        let pattern = PathPattern::parse("/items/:n");
        let params = pattern.match_path("/items/007").unwrap();
        assert_eq!(params.get("n").map(String::as_str), Some("007"));
    }
}
