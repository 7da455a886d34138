use crate::{
    core::{month::Month, reading::Reading, time_window::TimeWindow},
    quantity::energy::KilowattHours,
};

impl<'a, T> Select<'a> for T where T: Iterator<Item = &'a Reading> {}

/// Selection and summation over borrowed readings.
pub trait Select<'a>: Iterator<Item = &'a Reading> + Sized {
    /// Readings whose time-of-day falls within the window. Input order is
    /// preserved.
    fn in_window(self, window: TimeWindow) -> impl Iterator<Item = &'a Reading> {
        self.filter(move |reading| window.contains(reading.timestamp.time()))
    }

    /// Complement of [`Select::in_window`].
    fn outside_window(self, window: TimeWindow) -> impl Iterator<Item = &'a Reading> {
        self.filter(move |reading| !window.contains(reading.timestamp.time()))
    }

    /// Readings falling in the given calendar month.
    fn in_month(self, month: Month) -> impl Iterator<Item = &'a Reading> {
        self.filter(move |reading| month.contains(reading.timestamp))
    }

    /// Total consumption, zero for an empty selection.
    fn total(self) -> KilowattHours {
        self.map(|reading| reading.consumption).sum()
    }
}
