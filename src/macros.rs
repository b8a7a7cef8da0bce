//! Variadic front-ends for the list matcher factories.
//!
//! Each macro boxes its arguments and forwards them to the function of the
//! same name in [`matchers`](crate::matchers).

/// Variadic form of [`list_with_all_of`](crate::matchers::list_with_all_of).
///
/// ```
/// use eventmatch::{Event, Matcher, event_type, list_with_all_of};
/// use serde_json::json;
///
/// let events = vec![Event::new("b", json!({})), Event::new("a", json!({}))];
/// assert!(list_with_all_of![event_type("a"), event_type("b")].matches(Some(events.as_slice())));
/// ```
#[macro_export]
macro_rules! list_with_all_of {
    ($($matcher:expr),* $(,)?) => {
        $crate::matchers::list_with_all_of(::std::vec![$($crate::Matcher::boxed($matcher)),*])
    };
}

/// Variadic form of [`list_with_any_of`](crate::matchers::list_with_any_of).
#[macro_export]
macro_rules! list_with_any_of {
    ($($matcher:expr),* $(,)?) => {
        $crate::matchers::list_with_any_of(::std::vec![$($crate::Matcher::boxed($matcher)),*])
    };
}

/// Variadic form of [`sequence_of`](crate::matchers::sequence_of).
#[macro_export]
macro_rules! sequence_of {
    ($($matcher:expr),* $(,)?) => {
        $crate::matchers::sequence_of(::std::vec![$($crate::Matcher::boxed($matcher)),*])
    };
}

/// Variadic form of [`exact_sequence_of`](crate::matchers::exact_sequence_of).
#[macro_export]
macro_rules! exact_sequence_of {
    ($($matcher:expr),* $(,)?) => {
        $crate::matchers::exact_sequence_of(::std::vec![$($crate::Matcher::boxed($matcher)),*])
    };
}

/// Assert that `actual` (a reference) satisfies `matcher`, panicking with
/// both descriptions otherwise.
///
/// ```
/// use eventmatch::{Event, and_no_more, assert_that, event_type, exact_sequence_of};
/// use serde_json::json;
///
/// let events = vec![Event::new("started", json!({})), Event::new("stopped", json!({}))];
/// assert_that!(
///     events.as_slice(),
///     exact_sequence_of![event_type("started"), event_type("stopped"), and_no_more()]
/// );
/// ```
///
/// ```should_panic
/// use eventmatch::{Event, and_no_more, assert_that, event_type, exact_sequence_of};
/// use serde_json::json;
///
/// let events = vec![Event::new("started", json!({})), Event::new("crashed", json!({}))];
/// assert_that!(events.as_slice(), exact_sequence_of![event_type("started"), and_no_more()]);
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $matcher:expr $(,)?) => {
        if let ::core::result::Result::Err(mismatch) = $crate::verify(&$matcher, $actual) {
            ::core::panic!("{}", mismatch);
        }
    };
}
