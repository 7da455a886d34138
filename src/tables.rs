use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{core::billing::BillingRecord, quantity::cost::Pence};

/// Render the per-month billing summary.
pub fn build_billing_table(records: &[BillingRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Meter", "Year", "Month", "Flat cost", "Economy 7 saving"]);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.meter_id).add_attribute(Attribute::Bold),
            Cell::new(record.year).add_attribute(Attribute::Dim),
            Cell::new(record.month),
            Cell::new(record.cost).set_alignment(CellAlignment::Right),
            Cell::new(record.saved_cost).set_alignment(CellAlignment::Right).fg(
                if record.saved_cost >= Pence::ONE {
                    Color::Green
                } else if record.saved_cost < Pence::zero() {
                    Color::Red
                } else {
                    Color::DarkYellow
                },
            ),
        ]);
    }
    table
}
