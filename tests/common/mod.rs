#![allow(dead_code)]

use eventmatch::Event;
use serde_json::json;

pub fn dummy_event(event_type: &str) -> Event {
    Event::new(event_type, json!({"key": "value"})).with_ts(1000)
}

pub fn events_of(types: &[&str]) -> Vec<Event> {
    types.iter().map(|t| dummy_event(t)).collect()
}

pub fn order_flow() -> Vec<Event> {
    vec![
        Event::new("order_placed", json!({"order": 1, "total": 30}))
            .with_ts(1000)
            .with_id("evt-1")
            .with_actor("alice"),
        Event::new("payment_received", json!({"order": 1, "amount": 30}))
            .with_ts(1001)
            .with_id("evt-2")
            .with_actor("billing"),
        Event::new("order_shipped", json!({"order": 1, "carrier": {"name": "ups"}}))
            .with_ts(1002)
            .with_id("evt-3")
            .with_actor("warehouse"),
    ]
}
