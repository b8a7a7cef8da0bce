//! Human-readable text produced by matchers.

use std::fmt::{self, Write};

use crate::matcher::{BoxedMatcher, Matcher};

/// A text buffer matchers write into when describing what they expect and
/// why a candidate fell short.
///
/// All `append_*` methods return `&mut Self` so calls can be chained.
///
/// # Examples
///
/// ```
/// use eventmatch::Description;
///
/// let mut description = Description::new();
/// description.append_text("was ").append_value(&42);
/// assert_eq!(description.to_string(), "was <42>");
///
/// let mut description = Description::new();
/// description.append_candidate::<u32>(None);
/// assert_eq!(description.as_str(), "<absent>");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    /// An empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Append a value's `Debug` rendering wrapped in angle brackets.
    pub fn append_value<V: fmt::Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = write!(self.text, "<{value:?}>");
        self
    }

    /// Append a candidate, rendering the absent sentinel as `<absent>`.
    pub fn append_candidate<V: fmt::Debug + ?Sized>(&mut self, candidate: Option<&V>) -> &mut Self {
        match candidate {
            Some(value) => self.append_value(value),
            None => self.append_text("<absent>"),
        }
    }

    /// Append the self-description of `matcher`.
    pub fn append_description_of<T, M>(&mut self, matcher: &M) -> &mut Self
    where
        T: fmt::Debug + ?Sized,
        M: Matcher<T> + ?Sized,
    {
        matcher.describe_to(self);
        self
    }

    /// Append the descriptions of `matchers`, framed by `start` and `end`
    /// and separated by `separator`.
    pub fn append_list<E: fmt::Debug>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        matchers: &[BoxedMatcher<E>],
    ) -> &mut Self {
        self.append_text(start);
        for (i, matcher) in matchers.iter().enumerate() {
            if i > 0 {
                self.append_text(separator);
            }
            matcher.describe_to(self);
        }
        self.append_text(end)
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the description, returning its text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render a matcher's self-description as a `String`.
pub fn describe<T, M>(matcher: &M) -> String
where
    T: fmt::Debug + ?Sized,
    M: Matcher<T> + ?Sized,
{
    let mut description = Description::new();
    matcher.describe_to(&mut description);
    description.into_string()
}
