use std::fmt;

use crate::description::Description;

/// A reusable predicate over a candidate value, able to describe itself.
///
/// Candidates are passed as `Option<&T>`: `None` is the absent sentinel a
/// positional matcher sees once a list has run out of elements. Most
/// matchers reject it; [`nothing`](crate::nothing) is the one built to
/// accept it.
///
/// Matchers hold no evaluation state. Anything they need to track while
/// walking a list lives on the stack of a single `matches` call, so the
/// same matcher can be evaluated repeatedly, and from several threads.
///
/// # Examples
///
/// ```
/// use eventmatch::{Description, Matcher};
///
/// struct Even;
///
/// impl Matcher<u32> for Even {
///     fn matches(&self, item: Option<&u32>) -> bool {
///         item.is_some_and(|n| n % 2 == 0)
///     }
///
///     fn describe_to(&self, description: &mut Description) {
///         description.append_text("an even number");
///     }
/// }
///
/// assert!(Even.matches(Some(&4)));
/// assert!(!Even.matches(Some(&3)));
/// assert!(!Even.matches(None));
/// ```
pub trait Matcher<T: fmt::Debug + ?Sized> {
    /// Returns true if `item` satisfies this matcher.
    fn matches(&self, item: Option<&T>) -> bool;

    /// Describe what this matcher expects.
    fn describe_to(&self, description: &mut Description);

    /// Explain why `item` did not match. Only meaningful when
    /// [`matches`](Matcher::matches) returned false for the same `item`.
    fn describe_mismatch(&self, item: Option<&T>, description: &mut Description) {
        description.append_text("was ").append_candidate(item);
    }

    /// Box this matcher so it can sit in a list next to matchers of other
    /// concrete types.
    fn boxed(self) -> Box<dyn Matcher<T> + Send + Sync>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased matcher, as accepted by the list and sequence factories.
pub type BoxedMatcher<T> = Box<dyn Matcher<T> + Send + Sync>;

impl<T, M> Matcher<T> for Box<M>
where
    T: fmt::Debug + ?Sized,
    M: Matcher<T> + ?Sized,
{
    fn matches(&self, item: Option<&T>) -> bool {
        (**self).matches(item)
    }

    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description)
    }

    fn describe_mismatch(&self, item: Option<&T>, description: &mut Description) {
        (**self).describe_mismatch(item, description)
    }
}
