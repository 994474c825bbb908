use switchyard::pattern::PathPattern;
use switchyard::{Dispatcher, InvalidPatternError, RegisterError, Response};

use tracing_util::TestTracing;

fn ok_handler(_req: switchyard::RouterRequest) -> Response {
    Response::json(200, serde_json::Value::Null)
}

#[test]
fn test_literal_pattern_matches_only_identical_path() {
    let pattern = PathPattern::compile("/zoo/animals/list").unwrap();
    assert!(pattern.match_path("/zoo/animals/list").is_some());
    for path in [
        "/zoo/animals",
        "/zoo/animals/list/extra",
        "/zoo/Animals/list",
        "/zoo/animals/list/",
        "/",
    ] {
        assert!(
            pattern.match_path(path).is_none(),
            "literal pattern unexpectedly matched {path}"
        );
    }
}

#[test]
fn test_param_pattern_binds_single_segment() {
    let pattern = PathPattern::compile("/a/{name}/c").unwrap();

    let (params, _) = pattern.match_path("/a/X/c").unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].0.as_ref(), "name");
    assert_eq!(params[0].1, "X");

    // one parameter segment never spans two path segments
    assert!(pattern.match_path("/a/X/Y/c").is_none());
}

#[test]
fn test_wildcard_pattern_captures_remainder() {
    let pattern = PathPattern::compile("/files/*").unwrap();

    let (_, rest) = pattern.match_path("/files/a/b/c").unwrap();
    assert_eq!(rest.as_deref(), Some("a/b/c"));

    // empty remainder is a documented match, captured as ""
    let (_, rest) = pattern.match_path("/files/").unwrap();
    assert_eq!(rest.as_deref(), Some(""));
    let (_, rest) = pattern.match_path("/files").unwrap();
    assert_eq!(rest.as_deref(), Some(""));
}

#[test]
fn test_compilation_is_deterministic() {
    let a = PathPattern::compile("/pets/{id}/photos/*").unwrap();
    let b = PathPattern::compile("/pets/{id}/photos/*").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.segments(), b.segments());
}

#[test]
fn test_registration_rejects_bad_patterns() {
    let _tracing = TestTracing::init();
    let mut router = Dispatcher::new();

    let err = router.get("", ok_handler).unwrap_err();
    assert_eq!(err, RegisterError::Pattern(InvalidPatternError::Empty));

    let err = router.get("/a/*/b", ok_handler).unwrap_err();
    assert!(matches!(
        err,
        RegisterError::Pattern(InvalidPatternError::WildcardNotLast { .. })
    ));

    let err = router.get("/a/{id}/{id}", ok_handler).unwrap_err();
    assert!(matches!(
        err,
        RegisterError::Pattern(InvalidPatternError::DuplicateParam { .. })
    ));

    let err = router.get("/a/{}", ok_handler).unwrap_err();
    assert!(matches!(
        err,
        RegisterError::Pattern(InvalidPatternError::EmptyParamName { .. })
    ));
}

#[test]
fn test_multi_pattern_registration_is_atomic() {
    let _tracing = TestTracing::init();
    let mut router = Dispatcher::new();

    let err = router.get(["/a", "/b/*/c"], ok_handler).unwrap_err();
    assert!(matches!(
        err,
        RegisterError::Pattern(InvalidPatternError::WildcardNotLast { .. })
    ));

    // nothing was registered, so "/a" must miss
    let resp = router.dispatch(switchyard::Request::new(http::Method::GET, "/a"));
    assert_eq!(resp.status, 404);
}

#[test]
fn test_error_messages_name_the_pattern() {
    let err = PathPattern::compile("/a/{id}/b/{id}").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("/a/{id}/b/{id}"), "message was: {text}");
    assert!(text.contains("id"), "message was: {text}");
}
