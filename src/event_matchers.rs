//! Leaf matchers over the crate's [`Event`] record.

use serde_json::Value;

use crate::description::Description;
use crate::event::Event;
use crate::matcher::Matcher;

/// Matches events of a given type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTypeMatcher {
    event_type: String,
}

/// Matches an event whose `event_type` equals `event_type`.
///
/// ```
/// use eventmatch::{Event, Matcher, event_type};
/// use serde_json::json;
///
/// let placed = Event::new("order_placed", json!({}));
/// assert!(event_type("order_placed").matches(Some(&placed)));
/// assert!(!event_type("order_shipped").matches(Some(&placed)));
/// ```
pub fn event_type(event_type: impl Into<String>) -> EventTypeMatcher {
    EventTypeMatcher {
        event_type: event_type.into(),
    }
}

impl Matcher<Event> for EventTypeMatcher {
    fn matches(&self, item: Option<&Event>) -> bool {
        item.is_some_and(|e| e.event_type == self.event_type)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("event of type ")
            .append_value(&self.event_type);
    }

    fn describe_mismatch(&self, item: Option<&Event>, description: &mut Description) {
        match item {
            Some(e) => description
                .append_text("was event of type ")
                .append_value(&e.event_type),
            None => description.append_text("was <absent>"),
        };
    }
}

/// Matches events whose data holds a value at a JSON pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct DataMatcher {
    pointer: String,
    expected: Value,
}

/// Matches an event whose `data` holds `expected` at the JSON `pointer`
/// (RFC 6901, e.g. `"/customer/id"`; `""` addresses the whole payload).
///
/// ```
/// use eventmatch::{Event, Matcher, with_data};
/// use serde_json::json;
///
/// let event = Event::new("order_placed", json!({"customer": {"id": 7}}));
/// assert!(with_data("/customer/id", json!(7)).matches(Some(&event)));
/// assert!(!with_data("/customer/name", json!("bob")).matches(Some(&event)));
/// ```
pub fn with_data(pointer: impl Into<String>, expected: Value) -> DataMatcher {
    DataMatcher {
        pointer: pointer.into(),
        expected,
    }
}

impl Matcher<Event> for DataMatcher {
    fn matches(&self, item: Option<&Event>) -> bool {
        item.and_then(|e| e.data.pointer(&self.pointer)) == Some(&self.expected)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("event with data at ")
            .append_value(&self.pointer)
            .append_text(&format!(" equal to {}", self.expected));
    }

    fn describe_mismatch(&self, item: Option<&Event>, description: &mut Description) {
        let Some(event) = item else {
            description.append_text("was <absent>");
            return;
        };
        match event.data.pointer(&self.pointer) {
            Some(actual) => description
                .append_text("data at ")
                .append_value(&self.pointer)
                .append_text(&format!(" was {actual}")),
            None => description
                .append_text("data had no value at ")
                .append_value(&self.pointer),
        };
    }
}

/// Matches events caused by a given actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorMatcher {
    actor: String,
}

/// Matches an event whose `actor` is `actor`.
pub fn with_actor(actor: impl Into<String>) -> ActorMatcher {
    ActorMatcher {
        actor: actor.into(),
    }
}

impl Matcher<Event> for ActorMatcher {
    fn matches(&self, item: Option<&Event>) -> bool {
        item.and_then(|e| e.actor.as_deref()) == Some(self.actor.as_str())
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("event caused by ")
            .append_value(&self.actor);
    }

    fn describe_mismatch(&self, item: Option<&Event>, description: &mut Description) {
        match item {
            Some(e) => description
                .append_text("actor was ")
                .append_candidate(e.actor.as_ref()),
            None => description.append_text("was <absent>"),
        };
    }
}

/// Matches events carrying a given identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdMatcher {
    id: String,
}

/// Matches an event whose `id` is `id`.
pub fn with_id(id: impl Into<String>) -> IdMatcher {
    IdMatcher { id: id.into() }
}

impl Matcher<Event> for IdMatcher {
    fn matches(&self, item: Option<&Event>) -> bool {
        item.and_then(|e| e.id.as_deref()) == Some(self.id.as_str())
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("event with id ").append_value(&self.id);
    }

    fn describe_mismatch(&self, item: Option<&Event>, description: &mut Description) {
        match item {
            Some(e) => description.append_text("id was ").append_candidate(e.id.as_ref()),
            None => description.append_text("was <absent>"),
        };
    }
}

/// Matches events with the same type and data as a reference event.
#[derive(Debug, Clone, PartialEq)]
pub struct SamePayload {
    event_type: String,
    data: Value,
}

/// Matches an event with the same `event_type` and `data` as `expected`.
///
/// Timestamp, id, actor and meta are ignored, so a fixture built with
/// [`Event::new`] matches the event the system under test recorded a few
/// seconds later.
///
/// ```
/// use eventmatch::{Event, Matcher, same_payload_as};
/// use serde_json::json;
///
/// let expected = Event::new("paid", json!({"amount": 10}));
/// let actual = Event::new("paid", json!({"amount": 10})).with_ts(1).with_actor("svc");
/// assert!(same_payload_as(&expected).matches(Some(&actual)));
/// ```
pub fn same_payload_as(expected: &Event) -> SamePayload {
    SamePayload {
        event_type: expected.event_type.clone(),
        data: expected.data.clone(),
    }
}

impl Matcher<Event> for SamePayload {
    fn matches(&self, item: Option<&Event>) -> bool {
        item.is_some_and(|e| e.event_type == self.event_type && e.data == self.data)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("event of type ")
            .append_value(&self.event_type)
            .append_text(&format!(" with data {}", self.data));
    }

    fn describe_mismatch(&self, item: Option<&Event>, description: &mut Description) {
        match item {
            Some(e) => description
                .append_text("was event of type ")
                .append_value(&e.event_type)
                .append_text(&format!(" with data {}", e.data)),
            None => description.append_text("was <absent>"),
        };
    }
}
