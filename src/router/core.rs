use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use http::Method;
use tracing::{debug, info, warn};

use crate::dispatcher::{Response, RouterRequest};
use crate::pattern::{ParamVec, PathPattern};

/// Method constraint attached to a route entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodRule {
    /// Matches every request method (`ALL` registration).
    Any,
    /// Matches exactly this method.
    Only(Method),
}

impl MethodRule {
    /// Whether a request with `method` is a candidate for this entry.
    #[inline]
    #[must_use]
    pub fn matches(&self, method: &Method) -> bool {
        match self {
            MethodRule::Any => true,
            MethodRule::Only(m) => m == method,
        }
    }
}

impl From<Method> for MethodRule {
    fn from(method: Method) -> Self {
        MethodRule::Only(method)
    }
}

impl FromStr for MethodRule {
    type Err = http::method::InvalidMethod;

    /// `"ALL"` in any casing parses to [`MethodRule::Any`]; anything else
    /// must be a valid HTTP method token, including extension methods.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ALL") {
            Ok(MethodRule::Any)
        } else {
            Method::from_bytes(s.as_bytes()).map(MethodRule::Only)
        }
    }
}

impl fmt::Display for MethodRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodRule::Any => f.write_str("ALL"),
            MethodRule::Only(m) => write!(f, "{}", m),
        }
    }
}

/// Handler invoked for a matched route.
pub type Handler = Arc<dyn Fn(RouterRequest) -> Response + Send + Sync>;

/// One registered route.
///
/// Multi-pattern registrations keep their expanded pattern list in order.
/// Entries are created by registration, never mutated, and owned by the
/// table until it is dropped.
pub struct RouteEntry {
    pub(crate) method: MethodRule,
    pub(crate) patterns: Vec<PathPattern>,
    pub(crate) handler: Handler,
}

impl RouteEntry {
    /// The entry's method rule.
    #[must_use]
    pub fn method(&self) -> &MethodRule {
        &self.method
    }

    /// The entry's compiled patterns, in expanded registration order.
    #[must_use]
    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }
}

/// Result of successfully matching a request path against the table.
#[derive(Clone)]
pub struct RouteMatch {
    /// Position of the matched entry in the table.
    pub index: usize,
    /// Handler registered for the matched entry.
    pub handler: Handler,
    /// Raw text of the pattern that matched.
    pub pattern: String,
    /// Parameters bound by `{name}` segments.
    pub path_params: ParamVec,
    /// Remainder captured by a trailing wildcard; `Some("")` when the
    /// wildcard matched an empty remainder.
    pub wildcard: Option<String>,
}

/// Ordered route table, first-match-wins.
///
/// Owned by the dispatcher; populated single-threaded during registration
/// and read-only afterwards, so concurrent lookups need no locks.
#[derive(Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Append an entry. Entries are never removed or reordered.
    pub fn add_route(&mut self, method: MethodRule, patterns: Vec<PathPattern>, handler: Handler) {
        info!(
            method = %method,
            patterns = ?patterns.iter().map(PathPattern::as_str).collect::<Vec<_>>(),
            total_routes = self.entries.len() + 1,
            "Route registered"
        );
        self.entries.push(RouteEntry {
            method,
            patterns,
            handler,
        });
    }

    /// Scan entries in insertion order and return the first full match.
    ///
    /// No match is a defined outcome, not an error: the dispatcher turns
    /// `None` into its not-found response.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        debug!(method = %method, path = %path, "Route match attempt");

        for (index, entry) in self.entries.iter().enumerate() {
            if !entry.method.matches(method) {
                continue;
            }
            for pattern in &entry.patterns {
                if let Some((path_params, wildcard)) = pattern.match_path(path) {
                    debug!(
                        method = %method,
                        path = %path,
                        route_pattern = pattern.as_str(),
                        path_params = ?path_params,
                        "Route matched"
                    );
                    return Some(RouteMatch {
                        index,
                        handler: Arc::clone(&entry.handler),
                        pattern: pattern.as_str().to_string(),
                        path_params,
                        wildcard,
                    });
                }
            }
        }

        warn!(method = %method, path = %path, "No route matched");
        None
    }
}
