//! Route pattern parsing and matching
//!
//! Patterns are slash-separated segments: static text, `{name}` parameters
//! and a trailing `*name` catch-all. Parameters accept any non-empty
//! segment; checking parameter values is the validation stage's job.

use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors that can occur during route pattern operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutePatternError {
    #[error("Invalid pattern syntax: {0}")]
    InvalidSyntax(String),
    #[error("Multiple catch-all segments not allowed")]
    MultipleCatchAll,
    #[error("Catch-all must be the last segment")]
    CatchAllNotLast,
    #[error("Duplicate parameter name: {0}")]
    DuplicateParameter(String),
}

/// A single path segment in a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Static text segment
    Static(String),
    /// Named parameter segment
    Parameter(String),
    /// Catch-all segment (must be last)
    CatchAll(String),
}

/// Parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    /// The original path string
    pub original_path: String,
    /// Parsed path segments
    pub segments: Vec<PathSegment>,
    /// Parameter names in order
    pub param_names: Vec<String>,
    /// Whether this pattern has a catch-all segment
    pub has_catch_all: bool,
    /// Number of static segments (for priority calculation)
    pub static_segments: usize,
}

impl RoutePattern {
    /// Parse a route pattern from a path string
    pub fn parse(path: &str) -> Result<Self, RoutePatternError> {
        let mut segments = Vec::new();
        let mut param_names = Vec::new();
        let mut has_catch_all = false;
        let mut static_segments = 0;
        let mut seen_params = HashSet::new();

        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        for (index, segment) in path_segments.iter().enumerate() {
            let segment = segment.trim();

            if segment.starts_with('{') && segment.ends_with('}') {
                let name = segment[1..segment.len() - 1].trim().to_string();
                if name.is_empty() {
                    return Err(RoutePatternError::InvalidSyntax(
                        "Parameter name cannot be empty".to_string(),
                    ));
                }
                if !seen_params.insert(name.clone()) {
                    return Err(RoutePatternError::DuplicateParameter(name));
                }

                segments.push(PathSegment::Parameter(name.clone()));
                param_names.push(name);
            } else if let Some(name) = segment.strip_prefix('*') {
                if path_segments[index + 1..].iter().any(|s| s.starts_with('*')) {
                    return Err(RoutePatternError::MultipleCatchAll);
                }
                if index != path_segments.len() - 1 {
                    return Err(RoutePatternError::CatchAllNotLast);
                }
                if name.is_empty() {
                    return Err(RoutePatternError::InvalidSyntax(
                        "Catch-all segment must have a name".to_string(),
                    ));
                }
                if !seen_params.insert(name.to_string()) {
                    return Err(RoutePatternError::DuplicateParameter(name.to_string()));
                }

                segments.push(PathSegment::CatchAll(name.to_string()));
                param_names.push(name.to_string());
                has_catch_all = true;
            } else {
                if segment.contains('{') || segment.contains('}') {
                    return Err(RoutePatternError::InvalidSyntax(format!(
                        "Malformed parameter segment '{}'",
                        segment
                    )));
                }
                segments.push(PathSegment::Static(segment.to_string()));
                static_segments += 1;
            }
        }

        Ok(RoutePattern {
            original_path: path.to_string(),
            segments,
            param_names,
            has_catch_all,
            static_segments,
        })
    }

    /// Match a path, returning the extracted parameters on success.
    ///
    /// Parameter values are percent-decoded; a value that does not decode to
    /// UTF-8 makes the path not match.
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = HashMap::new();

        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Static(expected) => {
                    if path_segments.get(index) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                PathSegment::Parameter(name) => {
                    let value = path_segments.get(index)?;
                    params.insert(name.clone(), decode_segment(value)?);
                }
                PathSegment::CatchAll(name) => {
                    // Catch-all takes whatever remains, possibly nothing
                    let remaining = path_segments
                        .get(index..)
                        .unwrap_or_default()
                        .iter()
                        .map(|segment| decode_segment(segment))
                        .collect::<Option<Vec<_>>>()?;
                    params.insert(name.clone(), remaining.join("/"));
                    return Some(params);
                }
            }
        }

        (path_segments.len() == self.segments.len()).then_some(params)
    }

    /// Check if this pattern matches a given path
    pub fn matches(&self, path: &str) -> bool {
        self.match_path(path).is_some()
    }

    /// Calculate priority for route matching (lower = higher priority)
    ///
    /// - Static segment: 1
    /// - Parameter: 10
    /// - Catch-all: 100
    pub fn priority(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| match segment {
                PathSegment::Static(_) => 1,
                PathSegment::Parameter(_) => 10,
                PathSegment::CatchAll(_) => 100,
            })
            .sum()
    }

    /// Check if this is a static route (no parameters or catch-all)
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|seg| matches!(seg, PathSegment::Static(_)))
    }
}

fn decode_segment(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(|decoded| decoded.into_owned())
}
