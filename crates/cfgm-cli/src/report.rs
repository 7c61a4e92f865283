//! Rendering of validation results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use cfgm_model::{Severity, ValidationResult};

/// Print a summary table and an issue table for the results.
pub fn print_results(results: &[ValidationResult]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grid mapping"),
        header_cell("Convention"),
        header_cell("Status"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for result in results {
        table.add_row(vec![
            Cell::new(&result.mapping_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(format!("CF-{}", result.version)),
            status_cell(result.passed()),
            count_cell(result.error_count(), Color::Red),
            count_cell(result.warning_count(), Color::Yellow),
        ]);
    }
    println!("{table}");
    print_issue_table(results);
}

fn print_issue_table(results: &[ValidationResult]) {
    if results.iter().all(|result| result.findings.is_empty()) {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grid mapping"),
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Category"),
        header_cell("Attribute"),
        header_cell("Message"),
        header_cell("Did you mean"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for result in results {
        for finding in &result.findings {
            table.add_row(vec![
                Cell::new(&result.mapping_name),
                severity_cell(finding.severity),
                Cell::new(&finding.code),
                Cell::new(finding.category.label()),
                finding
                    .attribute
                    .as_deref()
                    .map_or_else(|| dim_cell("-"), Cell::new),
                Cell::new(&finding.message),
                if finding.suggestions.is_empty() {
                    dim_cell("-")
                } else {
                    Cell::new(finding.suggestions.join("\n"))
                },
            ]);
        }
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

/// Plain-text report, one header line per result and one line per finding.
pub fn render_text(results: &[ValidationResult]) -> String {
    let mut lines = Vec::new();
    for result in results {
        let status = if result.passed() { "PASS" } else { "FAIL" };
        lines.push(format!(
            "{} [CF-{}] {status} ({}, {})",
            result.mapping_name,
            result.version,
            plural(result.error_count(), "error"),
            plural(result.warning_count(), "warning"),
        ));
        for finding in &result.findings {
            lines.push(format!(
                "  {:<7} {} {}: {}",
                finding.severity.label(),
                finding.code,
                finding.attribute.as_deref().unwrap_or("-"),
                finding.message
            ));
        }
    }
    lines.join("\n")
}

/// Pretty-printed JSON array of results.
pub fn render_json(results: &[ValidationResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Apply the shared style to listing tables.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(180);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Fixed(36)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn status_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("PASS")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use cfgm_standards::RuleRegistry;
    use cfgm_validate::{GridMappingInput, GridMappingValidator};

    use super::*;

    fn results() -> Vec<ValidationResult> {
        let registry = RuleRegistry::load().unwrap();
        let validator = GridMappingValidator::new(&registry);
        vec![
            validator.validate(
                "1.6",
                &GridMappingInput::new("mercator")
                    .with_attribute("longitude_of_projection_origin", 10.0)
                    .with_attribute("standard_parallel", 20.0)
                    .with_attribute("scale_factor_at_projection_origin", 1.0),
            ),
            validator.validate(
                "1.7",
                &GridMappingInput::new("latitude_longitude")
                    .with_attribute("my_extension", "x")
                    .with_attribute("prime_meridian_name", "Pariss"),
            ),
            validator.validate(
                "1.7",
                &GridMappingInput::new("sinusoidal")
                    .with_attribute("longitude_of_projection_origin", 0.0),
            ),
        ]
    }

    #[test]
    fn text_report() {
        insta::assert_snapshot!(render_text(&results()), @r"
        mercator [CF-1.6] FAIL (1 error, 0 warnings)
          error   GM0103 standard_parallel: Attributes standard_parallel and scale_factor_at_projection_origin are mutually exclusive for mapping mercator
        latitude_longitude [CF-1.7] FAIL (1 error, 1 warning)
          warning GM0201 my_extension: Unrecognized attribute my_extension
          error   GM0401 prime_meridian_name: Attribute prime_meridian_name value 'Pariss' is not a known prime meridian name; did you mean 'Paris'?
        sinusoidal [CF-1.7] PASS (0 errors, 0 warnings)
        ");
    }

    #[test]
    fn json_report_lists_findings() {
        let json = render_json(&results()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[1]["findings"][1]["suggestions"][0], "Paris");
        assert!(value[2]["findings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn plural_counts() {
        assert_eq!(plural(0, "error"), "0 errors");
        assert_eq!(plural(1, "warning"), "1 warning");
    }
}
