//! Builds the bordered reference tables. Column styling mirrors the
//! study cards the tool replaces: cyan key column, green description
//! column, bold headers.
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::utils::data::{CommandLineEntry, PortProtocol};

fn base_table(headers: &[&str]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );

    table
}

pub fn ports_table(entries: &[PortProtocol]) -> Table {
    let mut table = base_table(&[
        "Port #",
        "Protocol Name",
        "Default Transport",
        "Description",
    ]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.port_number).fg(Color::Cyan),
            Cell::new(&entry.protocol_name),
            Cell::new(&entry.default_transport),
            Cell::new(&entry.description).fg(Color::Green),
        ]);
    }

    table
}

pub fn command_line_table(entries: &[CommandLineEntry]) -> Table {
    let mut table = base_table(&["Command", "Utility", "Common Switch", "Scenario"]);

    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.command).fg(Color::Cyan),
            Cell::new(&entry.utility),
            Cell::new(&entry.common_switch),
            Cell::new(&entry.scenario).fg(Color::Green),
        ]);
    }

    table
}
