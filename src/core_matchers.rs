//! General-purpose leaf matchers that work on any candidate type.

use std::fmt;
use std::marker::PhantomData;

use crate::description::Description;
use crate::matcher::Matcher;

/// Matches a present candidate equal to the expected value.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualTo<T> {
    expected: T,
}

/// Matches a present candidate equal to `expected`.
///
/// ```
/// use eventmatch::{Matcher, equal_to};
///
/// assert!(equal_to(3).matches(Some(&3)));
/// assert!(!equal_to(3).matches(Some(&4)));
/// assert!(!equal_to(3).matches(None));
/// ```
pub fn equal_to<T: PartialEq + fmt::Debug>(expected: T) -> EqualTo<T> {
    EqualTo { expected }
}

impl<T: PartialEq + fmt::Debug> Matcher<T> for EqualTo<T> {
    fn matches(&self, item: Option<&T>) -> bool {
        item.is_some_and(|actual| *actual == self.expected)
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("equal to ").append_value(&self.expected);
    }
}

/// Matches any present candidate. The complement of [`Nothing`](crate::Nothing).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Something;

/// Matches any present candidate.
pub fn something() -> Something {
    Something
}

impl<T: fmt::Debug + ?Sized> Matcher<T> for Something {
    fn matches(&self, item: Option<&T>) -> bool {
        item.is_some()
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("something");
    }
}

/// Matches a present candidate that satisfies a closure.
pub struct Predicate<T: ?Sized, F> {
    description: String,
    predicate: F,
    _candidate: PhantomData<fn(&T)>,
}

/// Matches a present candidate for which `predicate` returns true.
///
/// `description` is what the matcher reports in failure messages.
///
/// ```
/// use eventmatch::{Event, Matcher, predicate};
/// use serde_json::json;
///
/// let large = predicate("order over 100", |e: &Event| {
///     e.data["total"].as_u64().is_some_and(|t| t > 100)
/// });
/// assert!(large.matches(Some(&Event::new("order_placed", json!({"total": 250})))));
/// assert!(!large.matches(Some(&Event::new("order_placed", json!({"total": 5})))));
/// ```
pub fn predicate<T, F>(description: impl Into<String>, predicate: F) -> Predicate<T, F>
where
    T: fmt::Debug + ?Sized,
    F: Fn(&T) -> bool,
{
    Predicate {
        description: description.into(),
        predicate,
        _candidate: PhantomData,
    }
}

impl<T: ?Sized, F> fmt::Debug for Predicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<T, F> Matcher<T> for Predicate<T, F>
where
    T: fmt::Debug + ?Sized,
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: Option<&T>) -> bool {
        item.is_some_and(|actual| (self.predicate)(actual))
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text(&self.description);
    }
}

/// Inverts another matcher, including its verdict on the absent sentinel.
#[derive(Debug, Clone)]
pub struct Not<M> {
    inner: M,
}

/// Matches whatever `matcher` rejects.
///
/// `not(nothing())` therefore matches any present candidate.
pub fn not<M>(matcher: M) -> Not<M> {
    Not { inner: matcher }
}

impl<T, M> Matcher<T> for Not<M>
where
    T: fmt::Debug + ?Sized,
    M: Matcher<T>,
{
    fn matches(&self, item: Option<&T>) -> bool {
        !self.inner.matches(item)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("not ")
            .append_description_of(&self.inner);
    }
}
