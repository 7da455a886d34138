use std::{collections::HashSet, fs::File, io::Read, path::Path};

use chrono::NaiveDateTime;
use ordered_float::OrderedFloat;
use serde::Deserialize;

use crate::{core::reading::Reading, prelude::*, quantity::energy::KilowattHours};

/// Raw CSV row as exported by the metering backend.
#[derive(Deserialize)]
struct RawReading {
    meter_id: String,
    #[serde(rename = "DateTime")]
    timestamp: String,
    consumption_kwh: f64,
}

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%d/%m/%Y %H:%M"];

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .with_context(|| format!("unparsable timestamp `{raw}`"))
}

/// Load and sanitize readings from a CSV file.
pub fn load_readings(path: &Path) -> Result<Vec<Reading>> {
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    read_readings(file)
}

/// Read readings and apply sanitation: negative-consumption rows and exact
/// duplicate rows are dropped, first occurrence wins. Input order is
/// otherwise preserved.
#[instrument(skip_all)]
pub fn read_readings(reader: impl Read) -> Result<Vec<Reading>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut readings = Vec::new();
    let mut seen = HashSet::new();
    let mut n_negative = 0_usize;
    let mut n_duplicates = 0_usize;

    for (index, row) in csv_reader.deserialize().enumerate() {
        let raw: RawReading = row.with_context(|| format!("malformed row #{index}"))?;
        let timestamp = parse_timestamp(&raw.timestamp)
            .with_context(|| format!("row #{index}, meter `{}`", raw.meter_id))?;
        let consumption = KilowattHours(raw.consumption_kwh);

        if consumption < KilowattHours::zero() {
            n_negative += 1;
            continue;
        }
        if !seen.insert((raw.meter_id.clone(), timestamp, OrderedFloat(raw.consumption_kwh))) {
            n_duplicates += 1;
            continue;
        }

        readings.push(Reading { meter_id: raw.meter_id, timestamp, consumption });
    }

    info!(n_readings = readings.len(), n_negative, n_duplicates, "readings loaded");
    Ok(readings)
}
