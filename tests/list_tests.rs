mod common;

use common::{events_of, order_flow};
use eventmatch::{
    Event, Matcher, describe, event_type, list_with_all_of, list_with_any_of, nothing, verify,
    with_actor,
};

#[test]
fn test_all_of_matches_in_any_order() {
    let events = events_of(&["a", "b", "c"]);
    let matcher = list_with_all_of![event_type("c"), event_type("a")];
    assert!(matcher.matches(Some(events.as_slice())));
}

#[test]
fn test_all_of_fails_when_one_matcher_finds_nothing() {
    let events = events_of(&["a", "b"]);
    let matcher = list_with_all_of![event_type("a"), event_type("z")];
    assert!(!matcher.matches(Some(events.as_slice())));
}

#[test]
fn test_all_of_allows_reusing_an_element() {
    let events = order_flow();
    let matcher = list_with_all_of![event_type("order_placed"), with_actor("alice")];
    assert!(matcher.matches(Some(events.as_slice())));
}

#[test]
fn test_all_of_with_no_matchers_matches_any_list() {
    let empty: Vec<Event> = Vec::new();
    let matcher = list_with_all_of![];
    assert!(matcher.matches(Some(empty.as_slice())));
    assert!(matcher.matches(Some(events_of(&["a"]).as_slice())));
}

#[test]
fn test_all_of_on_empty_list_fails_with_matchers() {
    let empty: Vec<Event> = Vec::new();
    assert!(!list_with_all_of![event_type("a")].matches(Some(empty.as_slice())));
}

#[test]
fn test_all_of_rejects_absent_list() {
    let matcher = list_with_all_of::<Event>(Vec::new());
    assert!(!matcher.matches(None));
}

#[test]
fn test_all_of_ignores_nothing_matcher_elements() {
    // Elements are always present, so a `nothing()` sub-matcher never matches one.
    let events = events_of(&["a"]);
    let matcher = list_with_all_of![event_type("a"), nothing()];
    assert!(!matcher.matches(Some(events.as_slice())));
}

#[test]
fn test_all_of_mismatch_names_every_unmatched_matcher() {
    let events = events_of(&["a"]);
    let err = verify(
        &list_with_all_of![event_type("x"), event_type("a"), event_type("y")],
        events.as_slice(),
    )
    .unwrap_err();
    assert_eq!(
        err.expected,
        r#"list with all of: [event of type <"x">, event of type <"a">, event of type <"y">]"#
    );
    assert_eq!(
        err.actual,
        r#"no event matched event of type <"x">; no event matched event of type <"y">"#
    );
}

#[test]
fn test_any_of_matches_when_one_matcher_hits() {
    let events = events_of(&["a", "b"]);
    let matcher = list_with_any_of![event_type("z"), event_type("b")];
    assert!(matcher.matches(Some(events.as_slice())));
}

#[test]
fn test_any_of_fails_when_nothing_hits() {
    let events = events_of(&["a", "b"]);
    let matcher = list_with_any_of![event_type("y"), event_type("z")];
    assert!(!matcher.matches(Some(events.as_slice())));
}

#[test]
fn test_any_of_with_no_matchers_never_matches() {
    let events = events_of(&["a", "b"]);
    let matcher = list_with_any_of![];
    assert!(!matcher.matches(Some(events.as_slice())));
    let empty: Vec<Event> = Vec::new();
    assert!(!matcher.matches(Some(empty.as_slice())));
}

#[test]
fn test_any_of_rejects_absent_list() {
    assert!(!list_with_any_of![event_type("a")].matches(None));
}

#[test]
fn test_any_of_mismatch_descriptions() {
    let events = events_of(&["a", "b"]);
    let err = verify(&list_with_any_of![event_type("z")], events.as_slice()).unwrap_err();
    assert_eq!(err.actual, "none of 2 events matched");

    let empty: Vec<Event> = Vec::new();
    let err = verify(&list_with_any_of![event_type("z")], empty.as_slice()).unwrap_err();
    assert_eq!(err.actual, "was an empty list");

    let err = verify(&list_with_any_of![], events.as_slice()).unwrap_err();
    assert_eq!(err.actual, "had no matchers to apply to 2 events");
}

#[test]
fn test_describe_list_matchers() {
    let all = list_with_all_of![event_type("a")];
    assert_eq!(describe(&all), r#"list with all of: [event of type <"a">]"#);

    let any = list_with_any_of::<Event>(Vec::new());
    assert_eq!(describe(&any), "list with any of: []");
}

#[test]
fn test_matcher_is_reusable() {
    let matcher = list_with_all_of![event_type("a")];
    let first = events_of(&["a"]);
    let second = events_of(&["b"]);
    assert!(matcher.matches(Some(first.as_slice())));
    assert!(!matcher.matches(Some(second.as_slice())));
    assert!(matcher.matches(Some(first.as_slice())));
}
