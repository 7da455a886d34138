use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{month::Month, reading::Reading, select::Select, tariff::Tariff},
    quantity::cost::Pence,
};

/// One output row: a meter's monthly cost under the flat tariff, and what
/// Economy 7 would have saved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BillingRecord {
    pub meter_id: String,
    pub month: u32,
    pub year: i32,
    #[serde(rename = "cost(p)")]
    pub cost: Pence,
    #[serde(rename = "saved cost(p)")]
    pub saved_cost: Pence,
}

/// Compute one [`BillingRecord`] per meter per calendar month present in the
/// readings.
///
/// Meters appear in first-seen input order, months ascending within a meter.
/// A month with no readings yields no record. Readings exactly on a window
/// boundary classify as night, and the day set is the complement of the night
/// set, so every reading lands in exactly one of the two.
pub fn aggregate(readings: &[Reading], tariff: &Tariff) -> Vec<BillingRecord> {
    let mut records = Vec::new();

    for meter_id in readings.iter().map(|reading| reading.meter_id.as_str()).unique() {
        let meter_readings =
            readings.iter().filter(|reading| reading.meter_id == meter_id).collect_vec();
        let months = meter_readings
            .iter()
            .map(|reading| Month::of(reading.timestamp))
            .unique()
            .sorted();

        for month in months {
            let month_readings = meter_readings.iter().copied().in_month(month).collect_vec();

            let month_total = month_readings.iter().copied().total();
            let night_total =
                month_readings.iter().copied().in_window(tariff.night_window).total();
            let day_total =
                month_readings.iter().copied().outside_window(tariff.night_window).total();

            let flat_cost = month_total * tariff.flat_rate;
            let split_cost = day_total * tariff.flat_rate + night_total * tariff.economy_rate;

            records.push(BillingRecord {
                meter_id: meter_id.to_string(),
                month: month.month,
                year: month.year,
                cost: flat_cost.round_to_hundredths(),
                saved_cost: (flat_cost - split_cost).round_to_hundredths(),
            });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::quantity::{energy::KilowattHours, rate::KilowattHourRate};

    fn reading(meter_id: &str, timestamp: &str, consumption: f64) -> Reading {
        Reading {
            meter_id: meter_id.to_string(),
            timestamp: NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M").unwrap(),
            consumption: KilowattHours(consumption),
        }
    }

    #[test]
    fn test_january_scenario() {
        let readings = vec![
            reading("A", "2013-01-01 00:30", 2.0),
            reading("A", "2013-01-15 12:00", 3.0),
            reading("A", "2013-01-31 23:30", 1.0),
        ];

        let records = aggregate(&readings, &Tariff::default());

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.meter_id, "A");
        assert_eq!((record.year, record.month), (2013, 1));
        assert_eq!(record.cost, Pence(90.0));
        assert_eq!(record.saved_cost, Pence(12.0));
    }

    #[test]
    fn test_months_without_readings_are_skipped() {
        let readings = vec![
            reading("A", "2013-01-15 12:00", 1.0),
            reading("A", "2013-03-15 12:00", 1.0),
        ];

        let records = aggregate(&readings, &Tariff::default());

        let months: Vec<u32> = records.iter().map(|record| record.month).collect();
        assert_eq!(months, vec![1, 3]);
    }

    #[test]
    fn test_all_day_consumption_saves_nothing() {
        let readings = vec![
            reading("A", "2013-01-01 08:00", 1.2),
            reading("A", "2013-01-01 12:00", 3.4),
        ];

        let records = aggregate(&readings, &Tariff::default());

        assert_eq!(records[0].saved_cost, Pence(0.0));
    }

    #[test]
    fn test_nocturnal_consumption_always_saves() {
        let readings = vec![
            reading("A", "2013-01-01 12:00", 3.0),
            reading("A", "2013-01-01 23:30", 1.0),
        ];

        let records = aggregate(&readings, &Tariff::default());

        assert!(records[0].saved_cost > Pence::zero());
    }

    #[test]
    fn test_boundary_readings_are_billed_at_the_economy_rate() {
        let readings = vec![reading("A", "2013-01-01 06:00", 2.0)];

        let records = aggregate(&readings, &Tariff::default());

        // 2 kWh × (0.15 − 0.11) £/kWh = 8 p saved.
        assert_eq!(records[0].saved_cost, Pence(8.0));
    }

    #[test]
    fn test_meters_first_seen_months_ascending() {
        let readings = vec![
            reading("B", "2013-02-01 12:00", 1.0),
            reading("A", "2014-01-01 12:00", 1.0),
            reading("B", "2013-01-01 12:00", 1.0),
            reading("A", "2013-12-01 12:00", 1.0),
        ];

        let records = aggregate(&readings, &Tariff::default());

        let order: Vec<(&str, i32, u32)> = records
            .iter()
            .map(|record| (record.meter_id.as_str(), record.year, record.month))
            .collect();
        assert_eq!(
            order,
            vec![("B", 2013, 1), ("B", 2013, 2), ("A", 2013, 12), ("A", 2014, 1)]
        );
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let readings = vec![
            reading("A", "2013-01-01 00:30", 2.0),
            reading("A", "2013-01-15 12:00", 3.0),
            reading("B", "2013-02-28 23:00", 1.5),
        ];
        let tariff = Tariff::default();

        assert_eq!(aggregate(&readings, &tariff), aggregate(&readings, &tariff));
    }

    #[test]
    fn test_custom_tariff_is_honoured() {
        let readings = vec![reading("A", "2013-01-01 03:00", 10.0)];
        let tariff = Tariff::builder()
            .flat_rate(KilowattHourRate(0.20))
            .economy_rate(KilowattHourRate(0.10))
            .build();

        let records = aggregate(&readings, &tariff);

        assert_eq!(records[0].cost, Pence(200.0));
        assert_eq!(records[0].saved_cost, Pence(100.0));
    }
}
