use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// An immutable record of something that happened in the system under test.
///
/// The list matchers are generic and work over any event type; this struct
/// is the concrete event the crate's leaf matchers (see
/// [`event_type`](crate::event_type), [`with_data`](crate::with_data)) and
/// the [`journal`](crate::journal) loaders understand. It serializes as one
/// JSON object per line, with `event_type` written as `"type"`.
///
/// # Examples
///
/// ```
/// use eventmatch::Event;
/// use serde_json::json;
///
/// let event = Event::new("order_placed", json!({"total": 99}))
///     .with_id("ord-001")
///     .with_actor("user_42");
/// assert_eq!(event.event_type, "order_placed");
/// assert_eq!(event.actor.as_deref(), Some("user_42"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub struct Event {
    /// The event type identifier (e.g. `"order_placed"`).
    #[serde(rename = "type")]
    pub event_type: String,

    /// Arbitrary JSON payload.
    pub data: Value,

    /// Unix timestamp in seconds, auto-populated by [`Event::new`].
    pub ts: u64,

    /// Caller-provided unique identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Identity of whoever caused the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// Cross-cutting metadata kept apart from `data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl Event {
    /// Create a new event with the given type and data, stamped with the
    /// current time.
    ///
    /// # Panics
    ///
    /// Panics if the system clock is set before the Unix epoch.
    pub fn new(event_type: &str, data: Value) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        Event {
            event_type: event_type.to_string(),
            data,
            ts,
            id: None,
            actor: None,
            meta: None,
        }
    }

    /// Set the event's unique identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the actor that caused this event.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Set extensible metadata.
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Override the timestamp. Handy for deterministic fixtures.
    ///
    /// ```
    /// use eventmatch::Event;
    /// use serde_json::json;
    ///
    /// let event = Event::new("tick", json!(null)).with_ts(1000);
    /// assert_eq!(event.ts, 1000);
    /// ```
    pub fn with_ts(mut self, ts: u64) -> Self {
        self.ts = ts;
        self
    }
}
