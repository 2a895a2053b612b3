use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};
use serde_json::Value;

use crate::{api::smartmeter::ConsumptionRecord, fmt::FormattedValue};

/// Render the consumption series with the output schema keys as columns.
pub fn build_consumption_table(records: &[ConsumptionRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "Start",
        "End",
        "Peak",
        "Off-peak",
        "R. peak",
        "R. off-peak",
        "Inv. peak",
        "Inv. off-peak",
        "R. inv. peak",
        "R. inv. off-peak",
        "Measured",
        "Max power",
        "Max phys. power",
    ]);
    for record in records {
        table.add_row(vec![
            Cell::new(FormattedValue(&record.start_date)),
            Cell::new(FormattedValue(&record.end_date)).add_attribute(Attribute::Dim),
            quantity_cell(&record.qty_peak),
            quantity_cell(&record.qty_offpeak),
            quantity_cell(&record.qty_reactive_peak),
            quantity_cell(&record.qty_reactive_offpeak),
            quantity_cell(&record.qty_invoiced_peak),
            quantity_cell(&record.qty_invoiced_offpeak),
            quantity_cell(&record.qty_reactive_invoiced_peak),
            quantity_cell(&record.qty_reactive_invoiced_offpeak),
            quantity_cell(&record.qty_measured),
            quantity_cell(&record.max_power),
            quantity_cell(&record.max_physical_power),
        ]);
    }
    table
}

fn quantity_cell(value: &Value) -> Cell {
    Cell::new(FormattedValue(value)).set_alignment(CellAlignment::Right)
}
