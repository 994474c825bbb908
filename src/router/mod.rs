//! # Router Module
//!
//! The route table: ordered `(method, pattern, handler)` entries and the
//! lookup that resolves an incoming `(method, path)` pair to the first
//! matching entry.
//!
//! ## Matching
//!
//! Entries are scanned in insertion order. An entry is a candidate when its
//! [`MethodRule`] matches the request method exactly or is the `ALL` rule;
//! within a candidate, patterns are tried in expanded registration order.
//! The first full match wins, which makes registration order an explicit
//! precedence policy: register literal routes before parameterized ones
//! that could shadow them.
//!
//! ## Performance
//!
//! Lookup is a linear scan, proportional to table size times pattern
//! length. Route tables hold tens to low hundreds of entries and are built
//! once per process, so a precomputed tree buys nothing at this scale and
//! the scan keeps precedence trivially auditable.
//! `benches/match_throughput.rs` tracks the cost as the table grows.

mod core;
#[cfg(test)]
mod tests;

pub use core::{Handler, MethodRule, RouteEntry, RouteMatch, RouteTable};
