use std::fmt;

use crate::description::Description;
use crate::matcher::Matcher;

/// A failed expectation: what the matcher wanted and what it found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected: {expected}\n     but: {actual}")]
pub struct Mismatch {
    /// The matcher's self-description.
    pub expected: String,
    /// The matcher's explanation of the candidate.
    pub actual: String,
}

/// Evaluate `matcher` against `actual`, turning a non-match into a
/// [`Mismatch`] that carries both descriptions.
///
/// # Examples
///
/// ```
/// use eventmatch::{Event, event_type, list_with_any_of, verify};
/// use serde_json::json;
///
/// let events = vec![Event::new("user_joined", json!({}))];
///
/// assert!(verify(&list_with_any_of![event_type("user_joined")], events.as_slice()).is_ok());
///
/// let err = verify(&list_with_any_of![event_type("user_left")], events.as_slice()).unwrap_err();
/// assert_eq!(err.expected, r#"list with any of: [event of type <"user_left">]"#);
/// assert_eq!(err.actual, "none of 1 events matched");
/// ```
pub fn verify<T, M>(matcher: &M, actual: &T) -> Result<(), Mismatch>
where
    T: fmt::Debug + ?Sized,
    M: Matcher<T> + ?Sized,
{
    if matcher.matches(Some(actual)) {
        return Ok(());
    }

    let mut expected = Description::new();
    matcher.describe_to(&mut expected);
    let mut found = Description::new();
    matcher.describe_mismatch(Some(actual), &mut found);

    log::debug!("eventmatch: expected {expected}, but {found}");

    Err(Mismatch {
        expected: expected.into_string(),
        actual: found.into_string(),
    })
}
