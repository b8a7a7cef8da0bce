//! # eventmatch
//!
//! Composable matchers for asserting on ordered lists of domain events.
//!
//! ```
//! use eventmatch::{Event, and_no_more, assert_that, event_type, exact_sequence_of,
//!     list_with_all_of, sequence_of, with_data};
//! use serde_json::json;
//!
//! let events = vec![
//!     Event::new("order_placed", json!({"total": 10})),
//!     Event::new("payment_received", json!({"amount": 10})),
//!     Event::new("order_shipped", json!({})),
//! ];
//!
//! // In this relative order, possibly among others.
//! assert_that!(events.as_slice(), sequence_of![event_type("order_placed"), event_type("order_shipped")]);
//!
//! // Present somewhere, in any order.
//! assert_that!(events.as_slice(), list_with_all_of![event_type("order_shipped"), with_data("/amount", json!(10))]);
//!
//! // Exactly these, position for position, and nothing after.
//! assert_that!(events.as_slice(), exact_sequence_of![
//!     event_type("order_placed"),
//!     event_type("payment_received"),
//!     event_type("order_shipped"),
//!     and_no_more(),
//! ]);
//! ```

mod core_matchers;
mod description;
mod event;
mod event_matchers;
pub mod journal;
mod list;
mod macros;
mod matcher;
pub mod matchers;
mod nothing;
mod sequence;
mod verify;

pub use core_matchers::{EqualTo, Not, Predicate, Something, equal_to, not, predicate, something};
pub use description::{Description, describe};
pub use event::Event;
pub use event_matchers::{
    ActorMatcher, DataMatcher, EventTypeMatcher, IdMatcher, SamePayload, event_type,
    same_payload_as, with_actor, with_data, with_id,
};
pub use list::{ListWithAllOf, ListWithAnyOf};
pub use matcher::{BoxedMatcher, Matcher};
pub use matchers::{
    and_no_more, exact_sequence_of, list_with_all_of, list_with_any_of, nothing, sequence_of,
};
pub use nothing::Nothing;
pub use sequence::{ExactSequenceOf, SequenceOf};
pub use verify::{Mismatch, verify};
