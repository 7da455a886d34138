use std::path::PathBuf;

use chrono::NaiveTime;
use clap::Parser;

use crate::{
    core::{tariff::Tariff, time_window::TimeWindow},
    quantity::rate::KilowattHourRate,
};

#[derive(Parser)]
#[command(author, version, about)]
#[must_use]
pub struct Args {
    /// Cleaned smart-meter readings (CSV: `meter_id, DateTime, consumption_kwh`).
    pub input: PathBuf,

    /// Where to write the per-month billing records.
    #[clap(long, default_value = "output.csv", env = "OUTPUT_CSV")]
    pub output: PathBuf,

    #[clap(flatten)]
    pub tariff: TariffArgs,
}

#[derive(Parser)]
pub struct TariffArgs {
    /// Flat tariff in pounds per kilowatt-hour.
    #[clap(long, default_value = "0.15", env = "FLAT_RATE")]
    pub flat_rate: KilowattHourRate,

    /// Discounted overnight tariff in pounds per kilowatt-hour.
    #[clap(long, default_value = "0.11", env = "ECONOMY_RATE")]
    pub economy_rate: KilowattHourRate,

    /// Start of the discounted overnight window.
    #[clap(long, default_value = "23:00", env = "NIGHT_START", value_parser = parse_clock_time)]
    pub night_start: NaiveTime,

    /// End of the discounted overnight window.
    #[clap(long, default_value = "06:00", env = "NIGHT_END", value_parser = parse_clock_time)]
    pub night_end: NaiveTime,
}

impl TariffArgs {
    pub fn tariff(&self) -> Tariff {
        Tariff::builder()
            .flat_rate(self.flat_rate)
            .economy_rate(self.economy_rate)
            .night_window(TimeWindow::new(self.night_start, self.night_end))
            .build()
    }
}

fn parse_clock_time(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
}
