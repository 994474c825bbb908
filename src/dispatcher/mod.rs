//! # Dispatcher Module
//!
//! The user-facing router: registration sugar over a [`RouteTable`] and a
//! [`FilterChain`], the request/response value types, and the dispatch
//! sequence that ties them together.
//!
//! ## Request Flow
//!
//! 1. [`Dispatcher::dispatch`] extracts method and path from the incoming
//!    [`Request`].
//! 2. The route table is scanned; on a match the request is augmented with
//!    the extracted path parameters into a [`RouterRequest`], on a miss the
//!    configured not-found [`Response`] is returned and no filter runs.
//! 3. The route's pre-composed filter pipeline runs with the matched
//!    handler as its terminal; its response is returned unchanged.
//!
//! ## Lifecycle
//!
//! Two phases. Registration happens on `&mut self` during startup; the
//! first call to `dispatch` seals the dispatcher and pre-composes one
//! filter pipeline per route. From then on the value is read-only:
//! concurrent dispatches share it freely, and any further registration
//! call fails with [`RegisterError::Sealed`](crate::error::RegisterError).
//! Each dispatch is otherwise stateless; the sealed table and pipelines
//! are the only state shared between calls.
//!
//! Errors raised by handlers or filters are not intercepted: a panic
//! unwinds to the embedding caller, which owns error translation.
//!
//! [`RouteTable`]: crate::router::RouteTable
//! [`FilterChain`]: crate::filter::FilterChain

mod core;

pub use core::{
    Dispatcher, HeaderVec, Request, Response, RouterRequest, MAX_INLINE_HEADERS,
};
