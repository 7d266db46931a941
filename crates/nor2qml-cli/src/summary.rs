use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use nor2qml_model::IssueCategory;

use crate::types::{ConversionResult, EventStatus};

pub fn print_summary(result: &ConversionResult) {
    println!("Input: {}", result.input.display());
    println!("Schema: {}", result.schema.display());
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.report {
        println!("Report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Event"),
        header_cell("Line"),
        header_cell("Origin time"),
        header_cell("Type"),
        header_cell("Headers"),
        header_cell("Phases"),
        header_cell("Status"),
        header_cell("Issues"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    align_column(&mut table, 7, CellAlignment::Right);

    let mut total_phases = 0usize;
    let mut total_issues = 0usize;
    for event in &result.events {
        total_phases += event.phases;
        total_issues += event.discrepancies.len();
        table.add_row(vec![
            Cell::new(event.index)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(event.first_line),
            optional_cell(event.origin_time.as_deref()),
            optional_cell(event.event_type.as_deref()),
            Cell::new(event.headers),
            Cell::new(event.phases),
            status_cell(event.status),
            count_cell(event.discrepancies.len()),
            file_cell(event.output.as_ref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_phases).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(total_issues).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_issue_table(result);

    let failures: Vec<_> = result
        .events
        .iter()
        .filter_map(|event| event.error.as_ref().map(|error| (event.index, error)))
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (index, error) in failures {
            eprintln!("- event {index}: {error}");
        }
    }
}

fn print_issue_table(result: &ConversionResult) {
    let mut issues = Vec::new();
    for event in &result.events {
        for discrepancy in &event.discrepancies {
            issues.push((event.index, discrepancy));
        }
    }
    if issues.is_empty() {
        return;
    }
    issues.sort_by_key(|(index, discrepancy)| (*index, discrepancy.issue.code()));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Event"),
        header_cell("Code"),
        header_cell("Category"),
        header_cell("Location"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for (index, discrepancy) in issues {
        let category = discrepancy.issue.category();
        table.add_row(vec![
            Cell::new(index),
            Cell::new(discrepancy.issue.code()).fg(category_color(category)),
            Cell::new(category.label()),
            Cell::new(discrepancy.location.to_string()),
            optional_cell(discrepancy.issue.field()),
            Cell::new(discrepancy.issue.message()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn status_cell(status: EventStatus) -> Cell {
    let cell = Cell::new(status.label());
    match status {
        EventStatus::Converted => cell.fg(Color::Green).add_attribute(Attribute::Bold),
        EventStatus::Checked => cell.fg(Color::Green),
        EventStatus::Invalid => cell.fg(Color::Yellow).add_attribute(Attribute::Bold),
        EventStatus::Malformed => cell.fg(Color::Red).add_attribute(Attribute::Bold),
    }
}

fn file_cell(path: Option<&PathBuf>) -> Cell {
    match path.and_then(|path| path.file_name()) {
        Some(name) => Cell::new(name.to_string_lossy()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn category_color(category: IssueCategory) -> Color {
    match category {
        IssueCategory::Structure | IssueCategory::Format => Color::Red,
        IssueCategory::Presence | IssueCategory::Range | IssueCategory::Terminology => {
            Color::Yellow
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Fixed(22)),
            ColumnConstraint::UpperBoundary(Width::Fixed(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
