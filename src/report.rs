use std::{io::Write, path::Path};

use crate::{core::billing::BillingRecord, prelude::*};

/// Write the billing records to the output CSV, one row per (meter, month).
pub fn write_records(path: &Path, records: &[BillingRecord]) -> Result {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create `{}`", path.display()))?;
    write_to(file, records)
}

fn write_to(writer: impl Write, records: &[BillingRecord]) -> Result {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
