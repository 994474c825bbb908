use std::sync::Arc;

use http::Method;

use super::{MethodRule, RouteTable};
use crate::dispatcher::Response;
use crate::pattern::PathPattern;

fn table_with(routes: &[(MethodRule, &str)]) -> RouteTable {
    let mut table = RouteTable::new();
    for (method, pattern) in routes {
        let compiled = PathPattern::compile(pattern).unwrap();
        table.add_route(
            method.clone(),
            vec![compiled],
            Arc::new(|_| Response::json(200, serde_json::Value::Null)),
        );
    }
    table
}

#[test]
fn test_first_match_wins() {
    let table = table_with(&[
        (MethodRule::Only(Method::GET), "/x"),
        (MethodRule::Only(Method::GET), "/{p}"),
    ]);
    let m = table.match_route(&Method::GET, "/x").unwrap();
    assert_eq!(m.index, 0);
    assert_eq!(m.pattern, "/x");
    assert!(m.path_params.is_empty());
}

#[test]
fn test_registration_order_not_specificity() {
    // the parameter entry wins purely because it was registered first
    let table = table_with(&[
        (MethodRule::Only(Method::GET), "/{p}"),
        (MethodRule::Only(Method::GET), "/x"),
    ]);
    let m = table.match_route(&Method::GET, "/x").unwrap();
    assert_eq!(m.index, 0);
    assert_eq!(m.path_params[0].1, "x");
}

#[test]
fn test_method_mismatch_skips_entry() {
    let table = table_with(&[(MethodRule::Only(Method::POST), "/pets")]);
    assert!(table.match_route(&Method::GET, "/pets").is_none());
    assert!(table.match_route(&Method::POST, "/pets").is_some());
}

#[test]
fn test_any_method_rule_matches_everything() {
    let table = table_with(&[(MethodRule::Any, "/pets")]);
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::HEAD] {
        assert!(table.match_route(&method, "/pets").is_some());
    }
}

#[test]
fn test_multi_pattern_entry_order() {
    let mut table = RouteTable::new();
    table.add_route(
        MethodRule::Only(Method::GET),
        vec![
            PathPattern::compile("/a/{x}").unwrap(),
            PathPattern::compile("/{x}/a").unwrap(),
        ],
        Arc::new(|_| Response::json(200, serde_json::Value::Null)),
    );
    // both patterns could match "/a/a"; the first expanded pattern wins
    let m = table.match_route(&Method::GET, "/a/a").unwrap();
    assert_eq!(m.pattern, "/a/{x}");
}

#[test]
fn test_wildcard_match_carries_remainder() {
    let table = table_with(&[(MethodRule::Only(Method::GET), "/files/*")]);
    let m = table.match_route(&Method::GET, "/files/a/b").unwrap();
    assert_eq!(m.wildcard.as_deref(), Some("a/b"));
}

#[test]
fn test_method_rule_parsing() {
    assert_eq!("ALL".parse::<MethodRule>().unwrap(), MethodRule::Any);
    assert_eq!("all".parse::<MethodRule>().unwrap(), MethodRule::Any);
    assert_eq!(
        "GET".parse::<MethodRule>().unwrap(),
        MethodRule::Only(Method::GET)
    );
    // extension methods are allowed through the general entry point
    assert!(matches!(
        "PURGE".parse::<MethodRule>().unwrap(),
        MethodRule::Only(_)
    ));
    assert!("not a method".parse::<MethodRule>().is_err());
}
