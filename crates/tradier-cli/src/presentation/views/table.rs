use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

/// Printed in place of a table that has no rows.
pub const NO_RESULTS: &str = "No results found.";

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled);
    table
}

/// Bordered table with a header row (comfy-table left-aligns headers).
///
/// An empty `rows` yields [`NO_RESULTS`] instead of an empty frame. Rows
/// shorter or longer than `headers` are drawn with whatever cells they have.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut table = base_table();
    table.set_header(headers);
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Two-column bordered table, one pair per row, no header.
pub fn render_key_value(pairs: &[(String, String)]) -> String {
    let mut table = base_table();
    for (label, value) in pairs {
        table.add_row(vec![label, value]);
    }
    table.to_string()
}
