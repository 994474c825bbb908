//! # Filter Module
//!
//! Ordered request filters composed into a single pipeline around a
//! terminal handler.
//!
//! Filters run in registration order. Each filter receives the current
//! request and a [`Next`] continuation bound to the remainder of the chain
//! and may:
//!
//! - run `next` once and return its response, transformed or not;
//! - run `next` with a modified request, changing what downstream stages
//!   observe;
//! - return a response directly without running `next`, short-circuiting
//!   the rest of the chain and the handler.
//!
//! [`Next::run`] consumes the continuation, so invoking the remainder of
//! the chain twice does not compile. Composition happens once per terminal
//! handler ([`FilterChain::build`]) and the resulting [`Composed`] pipeline
//! is reused for every dispatch.

mod core;

pub use core::{Composed, Filter, FilterChain, Next};
