use std::fmt::{Debug, Formatter};

use chrono::NaiveDate;

#[must_use]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DateRange {
    /// Inclusive.
    pub start: NaiveDate,

    /// Inclusive.
    pub end: NaiveDate,
}

impl Debug for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}
