//! # Pattern Module
//!
//! Path pattern compilation and matching.
//!
//! A pattern string is compiled once at registration into a [`PathPattern`],
//! an ordered list of segment matchers, and read on every dispatch. The
//! grammar is `/`-separated segments:
//!
//! - a plain segment matches only an identical path segment;
//! - `{name}` matches any single non-empty segment and binds it;
//! - a final `*` captures the remainder of the path as one opaque string.
//!
//! ```
//! use switchyard::pattern::PathPattern;
//!
//! let pattern = PathPattern::compile("/pets/{id}/photos/*").unwrap();
//! let (params, rest) = pattern.match_path("/pets/42/photos/2024/05/cat.jpg").unwrap();
//! assert_eq!(params[0].1, "42");
//! assert_eq!(rest.as_deref(), Some("2024/05/cat.jpg"));
//! ```
//!
//! Compilation is pure and deterministic: the same string always yields a
//! structurally equal pattern. Grammar violations are reported as
//! [`InvalidPatternError`](crate::error::InvalidPatternError) before any
//! route is added.

mod core;
#[cfg(test)]
mod tests;

pub use core::{IntoPatterns, ParamVec, PathPattern, Segment, MAX_INLINE_PARAMS, WILDCARD};

pub(crate) use core::compile_all;
