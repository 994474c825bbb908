use std::fmt;

/// Pattern grammar violation detected while compiling a path pattern.
///
/// Returned at registration time. Registration is all-or-nothing: when a
/// multi-pattern registration contains a bad element, every element is
/// rejected and the route table is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPatternError {
    /// The pattern string (or pattern list) is empty.
    Empty,
    /// A wildcard segment appears before the final segment.
    ///
    /// The wildcard captures the remainder of the path, so nothing can
    /// follow it.
    WildcardNotLast {
        /// The offending pattern string
        pattern: String,
    },
    /// The same parameter name is bound by two segments of one pattern.
    DuplicateParam {
        /// The offending pattern string
        pattern: String,
        /// The repeated parameter name
        name: String,
    },
    /// A parameter segment has no name (`{}`).
    EmptyParamName {
        /// The offending pattern string
        pattern: String,
    },
}

impl fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPatternError::Empty => {
                write!(f, "invalid pattern: empty pattern")
            }
            InvalidPatternError::WildcardNotLast { pattern } => {
                write!(
                    f,
                    "invalid pattern '{}': a wildcard segment must be the final segment",
                    pattern
                )
            }
            InvalidPatternError::DuplicateParam { pattern, name } => {
                write!(
                    f,
                    "invalid pattern '{}': parameter name '{}' is bound more than once",
                    pattern, name
                )
            }
            InvalidPatternError::EmptyParamName { pattern } => {
                write!(
                    f,
                    "invalid pattern '{}': parameter segment has an empty name",
                    pattern
                )
            }
        }
    }
}

impl std::error::Error for InvalidPatternError {}

/// Failure of a registration call on a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The supplied pattern violates the pattern grammar.
    Pattern(InvalidPatternError),
    /// The dispatcher has already served a request.
    ///
    /// The route table and filter chain seal on the first dispatch; later
    /// mutation is a programming error and is rejected rather than raced.
    Sealed,
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::Pattern(err) => write!(f, "registration failed: {}", err),
            RegisterError::Sealed => {
                write!(
                    f,
                    "registration failed: the dispatcher is sealed; routes and filters \
                    must be registered before the first dispatch"
                )
            }
        }
    }
}

impl std::error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegisterError::Pattern(err) => Some(err),
            RegisterError::Sealed => None,
        }
    }
}

impl From<InvalidPatternError> for RegisterError {
    fn from(err: InvalidPatternError) -> Self {
        RegisterError::Pattern(err)
    }
}
