use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::InvalidPatternError;

/// Maximum number of path parameters before heap allocation.
///
/// Most route patterns bind well under 8 parameters, so extraction stays on
/// the stack for the common case.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the dispatch hot path.
///
/// Param names are `Arc<str>` because they come from the compiled pattern
/// (known at registration); cloning one into a match result is an O(1)
/// atomic increment. Values are per-request data from the path and stay
/// `String`.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// The wildcard marker segment.
pub const WILDCARD: &str = "*";

/// One matcher in a compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches only an identical path segment.
    Literal(String),
    /// Matches any single non-empty path segment and binds it under this name.
    Param(Arc<str>),
    /// Matches the remaining path, which may be empty. Always final.
    Wildcard,
}

/// A compiled path pattern: the raw string plus its ordered segment matchers.
///
/// Compiled once at registration, read on every dispatch, never mutated.
/// Compilation is deterministic, so equal pattern strings compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a pattern string.
    ///
    /// Grammar: `/`-separated segments; `{name}` binds a parameter; a final
    /// `*` captures the rest of the path. Empty segments produced by doubled
    /// or trailing slashes in the pattern are skipped, so `/pets/` compiles
    /// the same as `/pets`. `/` compiles to the root pattern with zero
    /// segments.
    ///
    /// # Errors
    ///
    /// [`InvalidPatternError`] when the pattern is empty, repeats a parameter
    /// name, names a parameter `{}`, or places `*` before the final segment.
    pub fn compile(pattern: &str) -> Result<Self, InvalidPatternError> {
        if pattern.is_empty() {
            return Err(InvalidPatternError::Empty);
        }

        let trimmed = pattern.strip_prefix('/').unwrap_or(pattern);
        let mut segments = Vec::new();
        let mut names: Vec<&str> = Vec::new();

        for seg in trimmed.split('/') {
            if seg.is_empty() {
                continue;
            }
            if segments.last() == Some(&Segment::Wildcard) {
                return Err(InvalidPatternError::WildcardNotLast {
                    pattern: pattern.to_string(),
                });
            }
            if seg == WILDCARD {
                segments.push(Segment::Wildcard);
            } else if let Some(name) = seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                if name.is_empty() {
                    return Err(InvalidPatternError::EmptyParamName {
                        pattern: pattern.to_string(),
                    });
                }
                if names.contains(&name) {
                    return Err(InvalidPatternError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                names.push(name);
                segments.push(Segment::Param(Arc::from(name)));
            } else {
                segments.push(Segment::Literal(seg.to_string()));
            }
        }

        Ok(PathPattern {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern string as supplied at registration.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The compiled segment matchers, in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match a request path against this pattern.
    ///
    /// Returns the bound parameters and, when the pattern ends in a
    /// wildcard, the captured remainder. The remainder may be the empty
    /// string: `/files/*` matches `/files` and `/files/` with `Some("")`.
    ///
    /// A match requires every pattern segment and every path segment to be
    /// consumed. Request paths are taken segment-exact: a trailing slash
    /// produces a trailing empty segment which only a wildcard can absorb,
    /// so `/x/` does not match the literal pattern `/x`.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<(ParamVec, Option<String>)> {
        let segs = split_path(path);
        let mut params = ParamVec::new();

        for (i, matcher) in self.segments.iter().enumerate() {
            match matcher {
                Segment::Wildcard => {
                    let rest = segs.get(i..).unwrap_or(&[]).join("/");
                    return Some((params, Some(rest)));
                }
                Segment::Literal(lit) => match segs.get(i) {
                    Some(s) if *s == lit.as_str() => {}
                    _ => return None,
                },
                Segment::Param(name) => match segs.get(i) {
                    Some(s) if !s.is_empty() => {
                        params.push((Arc::clone(name), (*s).to_string()));
                    }
                    _ => return None,
                },
            }
        }

        if segs.len() == self.segments.len() {
            Some((params, None))
        } else {
            None
        }
    }
}

/// Split a request path into segments.
///
/// The leading slash is dropped; empty interior and trailing segments are
/// kept so that `/x/` stays distinct from `/x`. Splitting and rejoining with
/// `/` is lossless, which is what makes the wildcard capture exact.
fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Pattern argument accepted by registration calls: a single pattern string
/// or an ordered collection of them.
///
/// A collection registers the same handler once per element, preserving
/// element order among the expanded patterns.
pub trait IntoPatterns {
    fn into_patterns(self) -> Vec<String>;
}

impl IntoPatterns for &str {
    fn into_patterns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoPatterns for String {
    fn into_patterns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoPatterns for &String {
    fn into_patterns(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<const N: usize> IntoPatterns for [&str; N] {
    fn into_patterns(self) -> Vec<String> {
        self.iter().map(|p| (*p).to_string()).collect()
    }
}

impl IntoPatterns for &[&str] {
    fn into_patterns(self) -> Vec<String> {
        self.iter().map(|p| (*p).to_string()).collect()
    }
}

impl IntoPatterns for Vec<&str> {
    fn into_patterns(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoPatterns for Vec<String> {
    fn into_patterns(self) -> Vec<String> {
        self
    }
}

/// Compile every element of a multi-pattern registration up front.
///
/// All-or-nothing: the first bad element fails the whole call, so no entry
/// is partially registered. An empty list is rejected the same as an empty
/// pattern string.
pub(crate) fn compile_all(patterns: Vec<String>) -> Result<Vec<PathPattern>, InvalidPatternError> {
    if patterns.is_empty() {
        return Err(InvalidPatternError::Empty);
    }
    patterns.iter().map(|p| PathPattern::compile(p)).collect()
}
