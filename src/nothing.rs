use std::fmt;

use crate::description::Description;
use crate::matcher::Matcher;

/// Matches only the absent sentinel.
///
/// Positional matchers hand it `None` once the list has no element left
/// for it, which makes it the terminator of an exact sequence.
/// Built by [`nothing`](crate::nothing) and [`and_no_more`](crate::and_no_more).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nothing;

impl<T: fmt::Debug + ?Sized> Matcher<T> for Nothing {
    fn matches(&self, item: Option<&T>) -> bool {
        item.is_none()
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("nothing");
    }

    fn describe_mismatch(&self, item: Option<&T>, description: &mut Description) {
        description.append_text("found trailing ").append_candidate(item);
    }
}
