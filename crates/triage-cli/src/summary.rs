use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

/// Print the run summary table and any per-record rejections.
pub fn print_summary(result: &RunResult) {
    let mut table = Table::new();
    let mut header = vec![
        header_cell("Pipeline"),
        header_cell("Input"),
        header_cell("Loaded"),
        header_cell("Reported"),
        header_cell("Rejected"),
    ];
    if result.total.is_some() {
        header.push(header_cell("Total (mg)"));
    }
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 2..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut row = vec![
        Cell::new(result.pipeline),
        Cell::new(result.input.display()),
        Cell::new(result.loaded),
        Cell::new(result.reported),
        rejected_cell(result.rejections.len()),
    ];
    if let Some(total) = result.total {
        row.push(Cell::new(format!("{total:.2}")));
    }
    table.add_row(row);
    println!();
    println!("{table}");
    if !result.rejections.is_empty() {
        eprintln!("Rejected records:");
        for rejection in &result.rejections {
            eprintln!("- {rejection}");
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn rejected_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
