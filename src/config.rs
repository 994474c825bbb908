//! Router configuration.
//!
//! A [`RouterConfig`] is built by the embedding application at startup and
//! handed to [`Dispatcher::with_config`](crate::Dispatcher::with_config);
//! the defaults suit most applications. There is no ambient or
//! environment-driven configuration: the router only ever sees the value
//! it was constructed with.

use serde_json::{json, Value};

use crate::dispatcher::Response;

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Status code of the synthesized not-found response (default 404).
    pub not_found_status: u16,
    /// Body of the synthesized not-found response.
    pub not_found_body: Value,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            not_found_status: 404,
            not_found_body: json!({ "error": "Not Found" }),
        }
    }
}

impl RouterConfig {
    /// The response returned when no route matches.
    pub(crate) fn not_found_response(&self) -> Response {
        Response::json(self.not_found_status, self.not_found_body.clone())
    }
}
