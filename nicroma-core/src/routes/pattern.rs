//! Path patterns with named parameters
//!
//! Patterns are `/`-segmented: a literal segment matches only itself, a
//! `:name` segment matches any single non-empty segment and binds its value.
//! There is no prefix or wildcard matching; a pattern matches the whole path
//! or not at all.

use std::collections::HashMap;

/// Parameters bound by a pattern match
pub type PathParams = HashMap<String, String>;

/// A single route pattern, e.g. `/carpetas/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    pattern: String,
}

impl PathPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Match `path` against this pattern, binding parameter segments.
    ///
    /// The query string is ignored and a trailing slash is tolerated, so
    /// `/carpetas/` and `/carpetas?page=2` both match `/carpetas`.
    pub fn capture(&self, path: &str) -> Option<PathParams> {
        let path = normalize(path);

        let pattern_parts: Vec<&str> = self.pattern.split('/').collect();
        let path_parts: Vec<&str> = path.split('/').collect();

        if pattern_parts.len() != path_parts.len() {
            return None;
        }

        let mut params = HashMap::new();

        for (pattern_part, path_part) in pattern_parts.iter().zip(path_parts.iter()) {
            if let Some(param_name) = pattern_part.strip_prefix(':') {
                // Parameter segments never bind an empty value
                if path_part.is_empty() {
                    return None;
                }
                params.insert(param_name.to_string(), path_part.to_string());
            } else if pattern_part != path_part {
                return None;
            }
        }

        Some(params)
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Strip the query string and any trailing slash (except on the root path).
fn normalize(path: &str) -> &str {
    let path = path.split('?').next().unwrap_or(path);
    if path.len() > 1 { path.trim_end_matches('/') } else { path }
}
