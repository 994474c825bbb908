//! # Switchyard
//!
//! **Switchyard** is an in-process request router: it registers
//! path-and-method-keyed handlers and ordered request filters, matches an
//! incoming request against the registered routes, and produces a response
//! by running the matched handler through the filter chain.
//!
//! There is no transport here. The embedding application owns sockets,
//! TLS, parsing, timeouts, and error translation; the router operates
//! purely on the request and response values it is handed.
//!
//! ## Architecture
//!
//! - **[`pattern`]** - path pattern compilation: literal segments, `{name}`
//!   parameters, and a trailing `*` wildcard, compiled once at registration
//! - **[`router`]** - the ordered route table and its first-match-wins,
//!   method-or-ALL lookup
//! - **[`filter`]** - ordered request filters composed once into a
//!   chain-of-responsibility around each handler
//! - **[`dispatcher`]** - the user-facing facade: registration sugar,
//!   request/response types, and the dispatch sequence
//! - **[`config`]** - not-found response configuration
//! - **[`ids`]** - ULID request identifiers for log correlation
//!
//! ## Quick Start
//!
//! ```
//! use http::Method;
//! use switchyard::{Dispatcher, Request, Response};
//!
//! let mut router = Dispatcher::new();
//!
//! router
//!     .get("/pets/{id}", |req| {
//!         Response::json(200, serde_json::json!({ "id": req.get_path_param("id") }))
//!     })
//!     .unwrap();
//! router
//!     .filter(|req, next| {
//!         // runs around every matched handler, in registration order
//!         let mut resp = next.run(req);
//!         resp.set_header("x-served-by", "switchyard".to_string());
//!         resp
//!     })
//!     .unwrap();
//!
//! let resp = router.dispatch(Request::new(Method::GET, "/pets/42"));
//! assert_eq!(resp.status, 200);
//! assert_eq!(resp.get_header("x-served-by"), Some("switchyard"));
//! ```
//!
//! ## Lifecycle
//!
//! Registration is single-threaded and happens at startup on `&mut self`.
//! The first dispatch seals the router and pre-composes one filter
//! pipeline per route; from then on the value is read-only and safe to
//! share across threads, and further registration fails with a typed
//! error. Runtime re-registration is deliberately unsupported: swap in a
//! freshly built dispatcher instead of mutating a serving one.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod filter;
pub mod ids;
pub mod pattern;
pub mod router;

pub use config::RouterConfig;
pub use dispatcher::{Dispatcher, HeaderVec, Request, Response, RouterRequest};
pub use error::{InvalidPatternError, RegisterError};
pub use filter::{Filter, FilterChain, Next};
pub use ids::RequestId;
pub use pattern::{ParamVec, PathPattern};
pub use router::{Handler, MethodRule, RouteMatch, RouteTable};
