//! Checks on the small integers that make up calendar and clock fields.

use std::ops::Range;


pub(crate) trait FieldExt: Sized {

    /// Returns whether this field value lies in the half-open range.
    fn is_within(&self, range: Range<Self>) -> bool;

    /// Returns whether this value lands on a column step. Steps below one
    /// are treated as one, so every value lands.
    fn is_on_step(&self, step: Self) -> bool;
}

impl FieldExt for i8 {
    fn is_within(&self, range: Range<i8>) -> bool {
        range.contains(self)
    }

    fn is_on_step(&self, step: i8) -> bool {
        self % step.max(1) == 0
    }
}
