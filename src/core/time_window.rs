use std::fmt::{Debug, Formatter};

use chrono::NaiveTime;

/// A clock-time interval, date-independent, inclusive at both boundaries.
///
/// When `start > end` the window wraps midnight and covers `[start, 24:00)`
/// plus `[00:00, end]`. When `start == end` the window degenerates to that
/// single instant.
#[derive(Copy, Clone, Eq, PartialEq)]
#[must_use]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Debug for TimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl TimeWindow {
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// The standard Economy 7 overnight window, 23:00 to 06:00.
    pub fn overnight() -> Self {
        Self::new(
            NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
        )
    }

    #[must_use]
    pub fn contains(self, time: NaiveTime) -> bool {
        if self.start <= self.end {
            (self.start <= time) && (time <= self.end)
        } else {
            (time >= self.start) || (time <= self.end)
        }
    }
}
