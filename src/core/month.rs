use std::fmt::{Debug, Formatter};

use chrono::{Datelike, NaiveDateTime};

/// Calendar bucket key, ordered year-major.
#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[must_use]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Debug for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Month {
    pub fn of(timestamp: NaiveDateTime) -> Self {
        Self { year: timestamp.year(), month: timestamp.month() }
    }

    #[must_use]
    pub fn contains(self, timestamp: NaiveDateTime) -> bool {
        Self::of(timestamp) == self
    }
}
