//! Order-sensitive matchers over a list of events.

use std::fmt;

use crate::description::Description;
use crate::matcher::{BoxedMatcher, Matcher};

/// Matches a list when each sub-matcher matches an element that comes
/// after the element the previous sub-matcher matched.
///
/// Unmatched elements in between are skipped. Once the list is exhausted,
/// any remaining sub-matchers are evaluated against the absent sentinel,
/// so only matchers that accept absence (such as
/// [`and_no_more`](crate::and_no_more)) can trail past the end.
/// Built by [`sequence_of`](crate::sequence_of).
pub struct SequenceOf<E: fmt::Debug> {
    matchers: Vec<BoxedMatcher<E>>,
}

impl<E: fmt::Debug> SequenceOf<E> {
    pub fn new(matchers: impl IntoIterator<Item = BoxedMatcher<E>>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }

    /// Walks the list once, assigning each matcher the leftmost element
    /// after the previous assignment.
    ///
    /// Only a matcher whose search starts at the end of the list is tried
    /// against the absent sentinel; one that scans remaining elements
    /// without a hit fails.
    ///
    /// Returns the index of the first matcher left unsatisfied together with
    /// the list position its search started from.
    fn first_failure(&self, events: &[E]) -> Option<(usize, usize)> {
        let mut cursor = 0;
        for (i, matcher) in self.matchers.iter().enumerate() {
            if cursor == events.len() {
                if matcher.matches(None) {
                    continue;
                }
                return Some((i, cursor));
            }
            let found = events[cursor..]
                .iter()
                .position(|e| matcher.matches(Some(e)));
            match found {
                Some(offset) => cursor += offset + 1,
                None => return Some((i, cursor)),
            }
        }
        None
    }
}

impl<E: fmt::Debug> fmt::Debug for SequenceOf<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceOf")
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

impl<E: fmt::Debug> Matcher<[E]> for SequenceOf<E> {
    fn matches(&self, item: Option<&[E]>) -> bool {
        item.is_some_and(|events| self.first_failure(events).is_none())
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("list with sequence of: ")
            .append_list("[", ", ", "]", &self.matchers);
    }

    fn describe_mismatch(&self, item: Option<&[E]>, description: &mut Description) {
        let Some(events) = item else {
            description.append_text("was <absent>");
            return;
        };
        let Some((index, cursor)) = self.first_failure(events) else {
            return;
        };
        description.append_text(&format!("matcher #{} (", index + 1));
        self.matchers[index].describe_to(description);
        if cursor == 0 {
            description.append_text(&format!(") matched none of {} events", events.len()));
        } else {
            description.append_text(&format!(
                ") matched no event after position {}",
                cursor - 1
            ));
        }
    }
}

/// Matches a list position by position: sub-matcher `k` must match
/// element `k`.
///
/// Elements beyond the last sub-matcher are ignored. Sub-matchers beyond
/// the last element are evaluated against the absent sentinel; append
/// [`and_no_more`](crate::and_no_more) to pin the list length.
/// Built by [`exact_sequence_of`](crate::exact_sequence_of).
pub struct ExactSequenceOf<E: fmt::Debug> {
    matchers: Vec<BoxedMatcher<E>>,
}

impl<E: fmt::Debug> ExactSequenceOf<E> {
    pub fn new(matchers: impl IntoIterator<Item = BoxedMatcher<E>>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }

    fn first_failure(&self, events: &[E]) -> Option<usize> {
        self.matchers
            .iter()
            .enumerate()
            .position(|(i, matcher)| !matcher.matches(events.get(i)))
    }
}

impl<E: fmt::Debug> fmt::Debug for ExactSequenceOf<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExactSequenceOf")
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

impl<E: fmt::Debug> Matcher<[E]> for ExactSequenceOf<E> {
    fn matches(&self, item: Option<&[E]>) -> bool {
        item.is_some_and(|events| self.first_failure(events).is_none())
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("list with exact sequence of: ")
            .append_list("[", ", ", "]", &self.matchers);
    }

    fn describe_mismatch(&self, item: Option<&[E]>, description: &mut Description) {
        let Some(events) = item else {
            description.append_text("was <absent>");
            return;
        };
        let Some(index) = self.first_failure(events) else {
            return;
        };
        let matcher = &self.matchers[index];
        description.append_text(&format!("at position {index}: expected "));
        matcher.describe_to(description);
        description.append_text(" but ");
        matcher.describe_mismatch(events.get(index), description);
    }
}
