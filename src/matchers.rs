//! Factory functions for event list matchers.
//!
//! Each function takes its sub-matchers as any iterable of
//! [`BoxedMatcher`]s. The macros of the same name
//! ([`list_with_all_of!`](crate::list_with_all_of!),
//! [`sequence_of!`](crate::sequence_of!), ...) accept unboxed matchers
//! directly and are usually nicer to write.
//!
//! # Examples
//!
//! ```
//! use eventmatch::{Event, Matcher, and_no_more, event_type, exact_sequence_of};
//! use serde_json::json;
//!
//! let events = vec![Event::new("opened", json!({})), Event::new("closed", json!({}))];
//!
//! let exact = exact_sequence_of(vec![
//!     event_type("opened").boxed(),
//!     event_type("closed").boxed(),
//!     and_no_more().boxed(),
//! ]);
//! assert!(exact.matches(Some(events.as_slice())));
//! ```

use std::fmt;

use crate::list::{ListWithAllOf, ListWithAnyOf};
use crate::matcher::BoxedMatcher;
use crate::nothing::Nothing;
use crate::sequence::{ExactSequenceOf, SequenceOf};

/// Matches a list where every one of `matchers` matches at least one event.
pub fn list_with_all_of<E: fmt::Debug>(
    matchers: impl IntoIterator<Item = BoxedMatcher<E>>,
) -> ListWithAllOf<E> {
    ListWithAllOf::new(matchers)
}

/// Matches a list where at least one of `matchers` matches any event.
pub fn list_with_any_of<E: fmt::Debug>(
    matchers: impl IntoIterator<Item = BoxedMatcher<E>>,
) -> ListWithAnyOf<E> {
    ListWithAnyOf::new(matchers)
}

/// Matches a list where `matchers` match events in order, allowing gaps of
/// unmatched events in between.
///
/// Use [`exact_sequence_of`] to forbid the gaps.
pub fn sequence_of<E: fmt::Debug>(
    matchers: impl IntoIterator<Item = BoxedMatcher<E>>,
) -> SequenceOf<E> {
    SequenceOf::new(matchers)
}

/// Matches a list where the `k`-th matcher matches the `k`-th event.
///
/// Excess events are ignored. Excess matchers are evaluated against the
/// absent sentinel; end with [`and_no_more`] to reject trailing events.
/// Use [`sequence_of`] to allow gaps.
pub fn exact_sequence_of<E: fmt::Debug>(
    matchers: impl IntoIterator<Item = BoxedMatcher<E>>,
) -> ExactSequenceOf<E> {
    ExactSequenceOf::new(matchers)
}

/// Matches the absent sentinel. Append it to an exact sequence to assert
/// that no trailing events remain.
pub fn and_no_more() -> Nothing {
    nothing()
}

/// Matches the absent sentinel and nothing else.
pub fn nothing() -> Nothing {
    Nothing
}
