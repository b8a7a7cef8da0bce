mod common;

use common::{dummy_event, order_flow};
use eventmatch::{
    Description, Event, Matcher, describe, equal_to, event_type, not, nothing, predicate,
    same_payload_as, something, with_actor, with_data, with_id,
};
use serde_json::json;

#[test]
fn test_nothing_matches_only_absent() {
    let event = dummy_event("a");
    assert!(nothing().matches(None::<&Event>));
    assert!(!nothing().matches(Some(&event)));
    assert_eq!(describe::<Event, _>(&nothing()), "nothing");
}

#[test]
fn test_nothing_on_lists_means_absent_not_empty() {
    let empty: Vec<Event> = Vec::new();
    assert!(!nothing().matches(Some(empty.as_slice())));
    assert!(nothing().matches(None::<&[Event]>));
}

#[test]
fn test_something_is_complement_of_nothing() {
    let event = dummy_event("a");
    assert!(something().matches(Some(&event)));
    assert!(!something().matches(None::<&Event>));
    assert!(not(nothing()).matches(Some(&event)));
    assert!(!not(nothing()).matches(None::<&Event>));
}

#[test]
fn test_event_type_matcher() {
    let event = dummy_event("order_placed");
    assert!(event_type("order_placed").matches(Some(&event)));
    assert!(!event_type("order_shipped").matches(Some(&event)));
    assert!(!event_type("order_placed").matches(None));
}

#[test]
fn test_event_type_mismatch_text() {
    let event = dummy_event("b");
    let mut description = Description::new();
    event_type("a").describe_mismatch(Some(&event), &mut description);
    assert_eq!(description.as_str(), r#"was event of type <"b">"#);
}

#[test]
fn test_with_data_uses_json_pointer() {
    let events = order_flow();
    assert!(with_data("/order", json!(1)).matches(Some(&events[0])));
    assert!(with_data("/carrier/name", json!("ups")).matches(Some(&events[2])));
    assert!(!with_data("/carrier/name", json!("dhl")).matches(Some(&events[2])));
    assert!(!with_data("/missing", json!(null)).matches(Some(&events[0])));
    assert!(with_data("", json!({"key": "value"})).matches(Some(&dummy_event("x"))));
}

#[test]
fn test_with_data_describes_itself_and_mismatch() {
    let events = order_flow();
    let matcher = with_data("/total", json!(99));
    assert_eq!(describe(&matcher), r#"event with data at <"/total"> equal to 99"#);

    let mut description = Description::new();
    matcher.describe_mismatch(Some(&events[0]), &mut description);
    assert_eq!(description.as_str(), r#"data at <"/total"> was 30"#);

    let mut description = Description::new();
    matcher.describe_mismatch(Some(&events[1]), &mut description);
    assert_eq!(description.as_str(), r#"data had no value at <"/total">"#);
}

#[test]
fn test_actor_and_id_matchers() {
    let events = order_flow();
    assert!(with_actor("alice").matches(Some(&events[0])));
    assert!(!with_actor("alice").matches(Some(&events[1])));
    assert!(!with_actor("alice").matches(Some(&dummy_event("a"))));
    assert!(with_id("evt-2").matches(Some(&events[1])));
    assert!(!with_id("evt-2").matches(Some(&dummy_event("a"))));

    let mut description = Description::new();
    with_actor("alice").describe_mismatch(Some(&dummy_event("a")), &mut description);
    assert_eq!(description.as_str(), "actor was <absent>");
}

#[test]
fn test_same_payload_ignores_metadata() {
    let expected = Event::new("paid", json!({"amount": 10}));
    let recorded = Event::new("paid", json!({"amount": 10}))
        .with_ts(42)
        .with_id("evt-9")
        .with_meta(json!({"session": "s1"}));
    assert!(same_payload_as(&expected).matches(Some(&recorded)));

    let different = Event::new("paid", json!({"amount": 11}));
    assert!(!same_payload_as(&expected).matches(Some(&different)));
    assert!(!same_payload_as(&expected).matches(None));
}

#[test]
fn test_equal_to_matcher() {
    let event = dummy_event("a");
    assert!(equal_to(event.clone()).matches(Some(&event)));
    assert!(!equal_to(event.clone().with_ts(1)).matches(Some(&event)));
    assert!(!equal_to(event.clone()).matches(None));
    assert_eq!(describe(&equal_to(5)), "equal to <5>");
}

#[test]
fn test_predicate_matcher() {
    let large = predicate("order over 20", |e: &Event| {
        e.data["total"].as_u64().is_some_and(|t| t > 20)
    });
    let events = order_flow();
    assert!(large.matches(Some(&events[0])));
    assert!(!large.matches(Some(&events[1])));
    assert!(!large.matches(None));
    assert_eq!(describe(&large), "order over 20");
}

#[test]
fn test_not_inverts_and_describes() {
    let event = dummy_event("a");
    let matcher = not(event_type("b"));
    assert!(matcher.matches(Some(&event)));
    assert!(!not(event_type("a")).matches(Some(&event)));
    assert_eq!(describe(&matcher), r#"not event of type <"b">"#);
}

#[test]
fn test_default_mismatch_description() {
    let mut description = Description::new();
    equal_to(3).describe_mismatch(Some(&4), &mut description);
    assert_eq!(description.to_string(), "was <4>");

    let mut description = Description::new();
    equal_to(3).describe_mismatch(None, &mut description);
    assert_eq!(description.to_string(), "was <absent>");
}

#[test]
fn test_boxed_matcher_forwards() {
    let boxed = event_type("a").boxed();
    assert!(boxed.matches(Some(&dummy_event("a"))));
    assert_eq!(describe(&boxed), r#"event of type <"a">"#);
}
