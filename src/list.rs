//! Presence matchers: order-independent checks over a list of events.

use std::fmt;

use crate::description::Description;
use crate::matcher::{BoxedMatcher, Matcher};

/// Matches a list in which every sub-matcher matches at least one element.
///
/// Elements may be reused: a single event can satisfy several
/// sub-matchers. With no sub-matchers any present list matches.
/// Built by [`list_with_all_of`](crate::list_with_all_of).
pub struct ListWithAllOf<E: fmt::Debug> {
    matchers: Vec<BoxedMatcher<E>>,
}

impl<E: fmt::Debug> ListWithAllOf<E> {
    pub fn new(matchers: impl IntoIterator<Item = BoxedMatcher<E>>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }

    /// Indices of the sub-matchers that matched no element.
    fn unmatched(&self, events: &[E]) -> Vec<usize> {
        self.matchers
            .iter()
            .enumerate()
            .filter(|(_, matcher)| !events.iter().any(|e| matcher.matches(Some(e))))
            .map(|(i, _)| i)
            .collect()
    }
}

impl<E: fmt::Debug> fmt::Debug for ListWithAllOf<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListWithAllOf")
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

impl<E: fmt::Debug> Matcher<[E]> for ListWithAllOf<E> {
    fn matches(&self, item: Option<&[E]>) -> bool {
        match item {
            Some(events) => self
                .matchers
                .iter()
                .all(|matcher| events.iter().any(|e| matcher.matches(Some(e)))),
            None => false,
        }
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("list with all of: ")
            .append_list("[", ", ", "]", &self.matchers);
    }

    fn describe_mismatch(&self, item: Option<&[E]>, description: &mut Description) {
        let Some(events) = item else {
            description.append_text("was <absent>");
            return;
        };
        for (n, i) in self.unmatched(events).into_iter().enumerate() {
            if n > 0 {
                description.append_text("; ");
            }
            description.append_text("no event matched ");
            self.matchers[i].describe_to(description);
        }
    }
}

/// Matches a list in which at least one sub-matcher matches at least one
/// element.
///
/// With no sub-matchers nothing can match, so every list is rejected.
/// Built by [`list_with_any_of`](crate::list_with_any_of).
pub struct ListWithAnyOf<E: fmt::Debug> {
    matchers: Vec<BoxedMatcher<E>>,
}

impl<E: fmt::Debug> ListWithAnyOf<E> {
    pub fn new(matchers: impl IntoIterator<Item = BoxedMatcher<E>>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for ListWithAnyOf<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListWithAnyOf")
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

impl<E: fmt::Debug> Matcher<[E]> for ListWithAnyOf<E> {
    fn matches(&self, item: Option<&[E]>) -> bool {
        match item {
            Some(events) => self
                .matchers
                .iter()
                .any(|matcher| events.iter().any(|e| matcher.matches(Some(e)))),
            None => false,
        }
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("list with any of: ")
            .append_list("[", ", ", "]", &self.matchers);
    }

    fn describe_mismatch(&self, item: Option<&[E]>, description: &mut Description) {
        match item {
            None => description.append_text("was <absent>"),
            Some([]) => description.append_text("was an empty list"),
            Some(events) if self.matchers.is_empty() => {
                description.append_text(&format!("had no matchers to apply to {} events", events.len()))
            }
            Some(events) => description.append_text(&format!("none of {} events matched", events.len())),
        };
    }
}
