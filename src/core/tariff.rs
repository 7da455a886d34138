use bon::Builder;

use crate::{core::time_window::TimeWindow, quantity::rate::KilowattHourRate};

/// Flat tariff charged on all consumption regardless of time of day.
pub const DEFAULT_FLAT_RATE: KilowattHourRate = KilowattHourRate(0.15);

/// Discounted Economy 7 rate charged on overnight consumption.
pub const DEFAULT_ECONOMY_RATE: KilowattHourRate = KilowattHourRate(0.11);

/// Tariff policy. Injected into the aggregator so that alternative policies
/// can be evaluated without touching the computation.
#[derive(Builder, Copy, Clone, Debug)]
pub struct Tariff {
    #[builder(default = DEFAULT_FLAT_RATE)]
    pub flat_rate: KilowattHourRate,

    #[builder(default = DEFAULT_ECONOMY_RATE)]
    pub economy_rate: KilowattHourRate,

    #[builder(default = TimeWindow::overnight())]
    pub night_window: TimeWindow,
}

impl Default for Tariff {
    fn default() -> Self {
        Self::builder().build()
    }
}
