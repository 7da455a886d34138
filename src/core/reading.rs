use chrono::NaiveDateTime;

use crate::quantity::energy::KilowattHours;

/// One cleaned smart-meter reading. Immutable once ingested: the store has
/// already dropped negative-consumption rows and exact duplicates.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub meter_id: String,
    pub timestamp: NaiveDateTime,
    pub consumption: KilowattHours,
}
