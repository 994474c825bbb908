use std::sync::Arc;

use tracing::debug;

use crate::dispatcher::{Response, RouterRequest};
use crate::router::Handler;

/// A stage of a composed chain: a filter wrapped around everything after
/// it, or the terminal handler itself.
type Stage = Arc<dyn Fn(RouterRequest) -> Response + Send + Sync>;

/// Continuation handed to a filter.
///
/// Running it invokes the rest of the chain: the next filter, or
/// ultimately the terminal handler. The value is consumed by [`run`],
/// so a filter can invoke the remainder of the chain at most once; not
/// running it at all is the short-circuit case.
///
/// [`run`]: Next::run
pub struct Next {
    stage: Stage,
}

impl Next {
    /// Invoke the remainder of the chain with `req`.
    #[must_use]
    pub fn run(self, req: RouterRequest) -> Response {
        (self.stage)(req)
    }
}

/// A request filter wrapping the downstream chain.
///
/// Implemented for any `Fn(RouterRequest, Next) -> Response` closure, so
/// most filters are registered as closures:
///
/// ```
/// use switchyard::Dispatcher;
///
/// let mut router = Dispatcher::new();
/// router.filter(|req, next| {
///     let mut resp = next.run(req);
///     resp.set_header("x-served-by", "switchyard".to_string());
///     resp
/// }).unwrap();
/// ```
pub trait Filter: Send + Sync {
    fn apply(&self, req: RouterRequest, next: Next) -> Response;
}

impl<F> Filter for F
where
    F: Fn(RouterRequest, Next) -> Response + Send + Sync,
{
    fn apply(&self, req: RouterRequest, next: Next) -> Response {
        self(req, next)
    }
}

/// Ordered filter sequence.
///
/// Populated single-threaded during registration; composition and every
/// later invocation are read-only, so the chain is shared across
/// concurrent dispatches without locks.
#[derive(Default, Clone)]
pub struct FilterChain {
    filters: Vec<Arc<dyn Filter>>,
}

impl FilterChain {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Number of registered filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Append a filter. Registration order is execution order.
    pub fn add(&mut self, filter: Arc<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Compose the chain around `terminal`.
    ///
    /// Folds the filter sequence right-to-left so the first registered
    /// filter becomes the outermost stage. Each stage is a shared closure,
    /// so the composed pipeline is cheap to invoke and reusable across
    /// dispatches; build it once per terminal and keep it.
    #[must_use]
    pub fn build(&self, terminal: Handler) -> Composed {
        debug!(filters = self.filters.len(), "Composing filter chain");
        let mut stage: Stage = terminal;
        for filter in self.filters.iter().rev() {
            let filter = Arc::clone(filter);
            let inner = stage;
            stage = Arc::new(move |req| {
                filter.apply(
                    req,
                    Next {
                        stage: Arc::clone(&inner),
                    },
                )
            });
        }
        Composed { stage }
    }
}

/// A filter chain composed with its terminal handler.
#[derive(Clone)]
pub struct Composed {
    stage: Stage,
}

impl Composed {
    /// Run the pipeline: filters in registration order, then the terminal
    /// handler, unless a filter short-circuits.
    #[must_use]
    pub fn run(&self, req: RouterRequest) -> Response {
        (self.stage)(req)
    }
}
