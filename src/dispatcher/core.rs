use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use http::Method;
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::config::RouterConfig;
use crate::error::RegisterError;
use crate::filter::{Composed, FilterChain, Next};
use crate::ids::RequestId;
use crate::pattern::{compile_all, IntoPatterns, ParamVec};
use crate::router::{MethodRule, RouteTable};

/// Maximum inline headers before heap allocation.
pub const MAX_INLINE_HEADERS: usize = 16;

/// Stack-allocated header storage.
///
/// Header names are `Arc<str>` because the common ones repeat across
/// requests; values are per-request data and stay `String`.
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// An incoming request as supplied by the embedding application.
///
/// Method and path drive routing. Headers and body are opaque to the
/// router and flow through to filters and the handler untouched.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub headers: HeaderVec,
    pub body: Option<Value>,
}

impl Request {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderVec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((Arc::from(name), value.into()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Get a header by name (case-insensitive per RFC 7230).
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A matched request as observed by filters and the handler: the original
/// [`Request`] augmented with the values the match extracted.
///
/// Created per dispatch and dropped when the response is produced; never
/// shared between dispatches.
#[derive(Debug, Clone)]
pub struct RouterRequest {
    /// Dispatch identifier stamped for log correlation.
    pub request_id: RequestId,
    /// HTTP method of the original request.
    pub method: Method,
    /// Path of the original request.
    pub path: String,
    /// Headers of the original request, untouched by the router.
    pub headers: HeaderVec,
    /// Body of the original request, untouched by the router.
    pub body: Option<Value>,
    /// Parameters bound by `{name}` segments of the matched pattern.
    pub path_params: ParamVec,
    /// Remainder captured by a trailing wildcard; `Some("")` for an empty
    /// remainder, `None` when the matched pattern had no wildcard.
    pub wildcard: Option<String>,
}

impl RouterRequest {
    /// Get a path parameter bound by a `{name}` segment.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a header by name (case-insensitive per RFC 7230).
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Convert path parameters to a `HashMap`.
    ///
    /// This allocates; prefer [`get_path_param`](Self::get_path_param) on
    /// the dispatch path.
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Response produced by a handler or filter and returned unchanged to the
/// embedding application.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    /// Status code (200, 404, ...).
    pub status: u16,
    #[serde(skip_serializing)]
    pub headers: HeaderVec,
    /// Response body as JSON.
    pub body: Value,
}

impl Response {
    #[must_use]
    pub fn new(status: u16, headers: HeaderVec, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A JSON response with the content type header set.
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        let mut headers = HeaderVec::new();
        headers.push((Arc::from("content-type"), "application/json".to_string()));
        Self {
            status,
            headers,
            body,
        }
    }

    /// An error response with a `{ "error": message }` body.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, serde_json::json!({ "error": message }))
    }

    /// Get a header by name (case-insensitive).
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Add or replace a header.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value));
    }
}

/// Pre-composed serving state, built once on the first dispatch.
struct Sealed {
    /// One composed filter pipeline per route entry, indexed like the table.
    composed: Vec<Composed>,
}

/// The user-facing router.
///
/// Registration populates the route table and filter chain; `dispatch`
/// resolves requests against them. See the [module docs](self) for the
/// two-phase lifecycle.
///
/// ```
/// use http::Method;
/// use switchyard::{Dispatcher, Request, Response};
///
/// let mut router = Dispatcher::new();
/// router
///     .get("/pets/{id}", |req| {
///         Response::json(200, serde_json::json!({ "id": req.get_path_param("id") }))
///     })
///     .unwrap();
///
/// let resp = router.dispatch(Request::new(Method::GET, "/pets/42"));
/// assert_eq!(resp.status, 200);
/// ```
pub struct Dispatcher {
    table: RouteTable,
    chain: FilterChain,
    config: RouterConfig,
    sealed: OnceCell<Sealed>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            table: RouteTable::new(),
            chain: FilterChain::new(),
            config,
            sealed: OnceCell::new(),
        }
    }

    /// Whether the first dispatch has sealed registration.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed.get().is_some()
    }

    fn check_unsealed(&self) -> Result<(), RegisterError> {
        if self.is_sealed() {
            return Err(RegisterError::Sealed);
        }
        Ok(())
    }

    /// General registration entry point.
    ///
    /// `method` is a concrete [`http::Method`] or [`MethodRule::Any`];
    /// `pattern` is one pattern string or an ordered collection of them
    /// (the same handler is registered once per element, in order).
    ///
    /// # Errors
    ///
    /// [`RegisterError::Pattern`] when a pattern violates the grammar (the
    /// whole call fails, nothing is registered) and
    /// [`RegisterError::Sealed`] after the first dispatch.
    pub fn route<P, H>(
        &mut self,
        method: impl Into<MethodRule>,
        pattern: P,
        handler: H,
    ) -> Result<(), RegisterError>
    where
        P: IntoPatterns,
        H: Fn(RouterRequest) -> Response + Send + Sync + 'static,
    {
        self.check_unsealed()?;
        let patterns = compile_all(pattern.into_patterns())?;
        self.table
            .add_route(method.into(), patterns, Arc::new(handler));
        Ok(())
    }

    /// Register a handler for GET requests.
    pub fn get<P, H>(&mut self, pattern: P, handler: H) -> Result<(), RegisterError>
    where
        P: IntoPatterns,
        H: Fn(RouterRequest) -> Response + Send + Sync + 'static,
    {
        self.route(Method::GET, pattern, handler)
    }

    /// Register a handler for POST requests.
    pub fn post<P, H>(&mut self, pattern: P, handler: H) -> Result<(), RegisterError>
    where
        P: IntoPatterns,
        H: Fn(RouterRequest) -> Response + Send + Sync + 'static,
    {
        self.route(Method::POST, pattern, handler)
    }

    /// Register a handler for PUT requests.
    pub fn put<P, H>(&mut self, pattern: P, handler: H) -> Result<(), RegisterError>
    where
        P: IntoPatterns,
        H: Fn(RouterRequest) -> Response + Send + Sync + 'static,
    {
        self.route(Method::PUT, pattern, handler)
    }

    /// Register a handler for DELETE requests.
    pub fn delete<P, H>(&mut self, pattern: P, handler: H) -> Result<(), RegisterError>
    where
        P: IntoPatterns,
        H: Fn(RouterRequest) -> Response + Send + Sync + 'static,
    {
        self.route(Method::DELETE, pattern, handler)
    }

    /// Register a handler for HEAD requests.
    pub fn head<P, H>(&mut self, pattern: P, handler: H) -> Result<(), RegisterError>
    where
        P: IntoPatterns,
        H: Fn(RouterRequest) -> Response + Send + Sync + 'static,
    {
        self.route(Method::HEAD, pattern, handler)
    }

    /// Register a handler matching every method.
    pub fn all<P, H>(&mut self, pattern: P, handler: H) -> Result<(), RegisterError>
    where
        P: IntoPatterns,
        H: Fn(RouterRequest) -> Response + Send + Sync + 'static,
    {
        self.route(MethodRule::Any, pattern, handler)
    }

    /// Append a filter to the chain.
    ///
    /// Filters run in registration order around every matched handler. The
    /// closure form covers most filters; a type implementing
    /// [`Filter`](crate::filter::Filter) can be added through
    /// [`FilterChain::add`] on a chain built by hand.
    ///
    /// # Errors
    ///
    /// [`RegisterError::Sealed`] after the first dispatch.
    pub fn filter<F>(&mut self, filter: F) -> Result<(), RegisterError>
    where
        F: Fn(RouterRequest, Next) -> Response + Send + Sync + 'static,
    {
        self.check_unsealed()?;
        info!(total_filters = self.chain.len() + 1, "Filter registered");
        self.chain.add(Arc::new(filter));
        Ok(())
    }

    /// Resolve `req` to a route and produce a response.
    ///
    /// Runs synchronously end-to-end: match, then the filter pipeline with
    /// the matched handler as terminal. A miss returns the configured
    /// not-found response without invoking any filter. Panics from
    /// handlers or filters unwind to the caller unchanged.
    pub fn dispatch(&self, req: Request) -> Response {
        let sealed = self.sealed.get_or_init(|| self.seal());
        let request_id = RequestId::new();

        debug!(
            request_id = %request_id,
            method = %req.method,
            path = %req.path,
            "Dispatch start"
        );

        let Some(matched) = self.table.match_route(&req.method, &req.path) else {
            debug!(
                request_id = %request_id,
                status = self.config.not_found_status,
                "Dispatch complete, no route"
            );
            return self.config.not_found_response();
        };

        let router_req = RouterRequest {
            request_id,
            method: req.method,
            path: req.path,
            headers: req.headers,
            body: req.body,
            path_params: matched.path_params,
            wildcard: matched.wildcard,
        };

        let start = Instant::now();
        let resp = sealed.composed[matched.index].run(router_req);
        debug!(
            request_id = %request_id,
            route_pattern = %matched.pattern,
            status = resp.status,
            latency_us = start.elapsed().as_micros() as u64,
            "Dispatch complete"
        );
        resp
    }

    fn seal(&self) -> Sealed {
        info!(
            routes = self.table.len(),
            filters = self.chain.len(),
            "Dispatcher sealed, composing filter pipelines"
        );
        let composed = self
            .table
            .entries()
            .iter()
            .map(|entry| self.chain.build(Arc::clone(&entry.handler)))
            .collect();
        Sealed { composed }
    }

    /// Iterate `(method, pattern)` pairs in registration order, one pair
    /// per expanded pattern.
    pub fn routes(&self) -> impl Iterator<Item = (&MethodRule, &str)> {
        self.table.entries().iter().flat_map(|entry| {
            entry
                .patterns
                .iter()
                .map(move |p| (&entry.method, p.as_str()))
        })
    }

    /// Print all registered routes to stdout.
    ///
    /// Useful for verifying the table at startup.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.table.len());
        for (method, pattern) in self.routes() {
            println!("[route] {method} {pattern}");
        }
    }
}
