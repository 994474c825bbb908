use super::{PathPattern, Segment};
use crate::error::InvalidPatternError;

#[test]
fn test_root_pattern() {
    let pattern = PathPattern::compile("/").unwrap();
    assert!(pattern.segments().is_empty());
    assert!(pattern.match_path("/").is_some());
    assert!(pattern.match_path("/a").is_none());
}

#[test]
fn test_literal_segments() {
    let pattern = PathPattern::compile("/zoo/animals").unwrap();
    assert_eq!(
        pattern.segments(),
        &[
            Segment::Literal("zoo".to_string()),
            Segment::Literal("animals".to_string()),
        ]
    );
    assert!(pattern.match_path("/zoo/animals").is_some());
    assert!(pattern.match_path("/zoo/plants").is_none());
    assert!(pattern.match_path("/zoo").is_none());
    assert!(pattern.match_path("/zoo/animals/123").is_none());
}

#[test]
fn test_parameterized_pattern() {
    let pattern = PathPattern::compile("/items/{id}").unwrap();
    let (params, wildcard) = pattern.match_path("/items/123").unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].0.as_ref(), "id");
    assert_eq!(params[0].1, "123");
    assert!(wildcard.is_none());
}

#[test]
fn test_param_requires_nonempty_segment() {
    let pattern = PathPattern::compile("/items/{id}").unwrap();
    assert!(pattern.match_path("/items/").is_none());
    assert!(pattern.match_path("/items//").is_none());
}

#[test]
fn test_nested_params() {
    let pattern = PathPattern::compile("/a/{b}/c/{d}").unwrap();
    let (params, _) = pattern.match_path("/a/1/c/2").unwrap();
    assert_eq!(params[0].1, "1");
    assert_eq!(params[1].1, "2");
    assert!(pattern.match_path("/a/1/x/2").is_none());
}

#[test]
fn test_wildcard_captures_remainder() {
    let pattern = PathPattern::compile("/files/*").unwrap();
    let (_, rest) = pattern.match_path("/files/a/b/c").unwrap();
    assert_eq!(rest.as_deref(), Some("a/b/c"));
}

#[test]
fn test_wildcard_empty_remainder() {
    let pattern = PathPattern::compile("/files/*").unwrap();
    let (_, rest) = pattern.match_path("/files").unwrap();
    assert_eq!(rest.as_deref(), Some(""));
    let (_, rest) = pattern.match_path("/files/").unwrap();
    assert_eq!(rest.as_deref(), Some(""));
}

#[test]
fn test_wildcard_remainder_is_lossless() {
    // doubled slashes inside the remainder survive the capture
    let pattern = PathPattern::compile("/files/*").unwrap();
    let (_, rest) = pattern.match_path("/files/a//b").unwrap();
    assert_eq!(rest.as_deref(), Some("a//b"));
}

#[test]
fn test_trailing_slash_is_significant() {
    let pattern = PathPattern::compile("/x").unwrap();
    assert!(pattern.match_path("/x").is_some());
    assert!(pattern.match_path("/x/").is_none());
}

#[test]
fn test_pattern_trailing_slash_is_skipped() {
    assert_eq!(
        PathPattern::compile("/pets/").unwrap().segments(),
        PathPattern::compile("/pets").unwrap().segments()
    );
}

#[test]
fn test_partial_braces_are_literals() {
    let pattern = PathPattern::compile("/a/{b").unwrap();
    assert_eq!(
        pattern.segments(),
        &[
            Segment::Literal("a".to_string()),
            Segment::Literal("{b".to_string()),
        ]
    );
}

#[test]
fn test_compile_is_deterministic() {
    let a = PathPattern::compile("/a/{b}/*").unwrap();
    let b = PathPattern::compile("/a/{b}/*").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_pattern_rejected() {
    assert_eq!(
        PathPattern::compile("").unwrap_err(),
        InvalidPatternError::Empty
    );
}

#[test]
fn test_wildcard_not_last_rejected() {
    let err = PathPattern::compile("/a/*/b").unwrap_err();
    assert!(matches!(err, InvalidPatternError::WildcardNotLast { .. }));
}

#[test]
fn test_duplicate_param_rejected() {
    let err = PathPattern::compile("/a/{id}/b/{id}").unwrap_err();
    match err {
        InvalidPatternError::DuplicateParam { name, .. } => assert_eq!(name, "id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_param_name_rejected() {
    let err = PathPattern::compile("/a/{}").unwrap_err();
    assert!(matches!(err, InvalidPatternError::EmptyParamName { .. }));
}
