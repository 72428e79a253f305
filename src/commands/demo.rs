use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use crate::utils::config::Config;

/// Tour of the terminal styling used by the study tool, ending in a
/// staged diagnostics pass
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Demo;

const HARDWARE_GLOSSARY: &[(&str, &str, &str)] = &[
    ("CPU", "Central Processing Unit", "The primary chip"),
    ("RAM", "Random Access Memory", "Short-term storage"),
    ("SSD", "Solid-State Drive", "Fast flash storage"),
    ("PSU", "Power Supply Unit", "Voltage converter"),
];

const DIAGNOSTIC_STEPS: &[&str] = &[
    "Probing CPU",
    "Testing memory",
    "Checking storage health",
    "Measuring PSU rails",
    "Reading SMART data",
];

impl super::Command for Demo {
    fn execute(self) -> eyre::Result<()> {
        let config = Config::load()?;

        if config.no_color {
            colored::control::set_override(false);
        }

        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your name")
            .default("Technician".to_string())
            .interact_text()?;

        println!("\nWelcome, {name}. Initializing diagnostics...\n");

        println!("{}", glossary_table());

        run_diagnostics()?;

        let stable = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Is the system stable?")
            .default(true)
            .interact_opt()?
            .unwrap_or(true);

        if stable {
            println!(
                "\n{}",
                "All systems nominal. Happy troubleshooting!".green().bold()
            );
        } else {
            println!(
                "\n{}",
                " !!! CRITICAL ERROR: BSOD DETECTED !!! ".white().on_red().bold()
            );
        }

        Ok(())
    }
}

fn glossary_table() -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Acronym").add_attribute(Attribute::Bold),
            Cell::new("Definition").add_attribute(Attribute::Bold),
            Cell::new("Hint").add_attribute(Attribute::Bold),
        ]);

    for (acronym, definition, hint) in HARDWARE_GLOSSARY {
        table.add_row(vec![
            Cell::new(acronym).fg(Color::Cyan),
            Cell::new(definition),
            Cell::new(hint).fg(Color::Green),
        ]);
    }

    table
}

/// The steps are theater; nothing on the host is inspected or touched.
fn run_diagnostics() -> eyre::Result<()> {
    let bar = ProgressBar::new(DIAGNOSTIC_STEPS.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut rng = rand::rng();

    for step in DIAGNOSTIC_STEPS {
        bar.set_message(*step);
        std::thread::sleep(Duration::from_millis(rng.random_range(150..450)));
        bar.inc(1);
    }

    bar.finish_with_message("Diagnostics complete");

    Ok(())
}
