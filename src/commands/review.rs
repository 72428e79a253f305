//! The interactive study loop. Shows a banner, then keeps prompting
//! for a dataset to review until the user exits.
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use strum::VariantArray;

use crate::utils::{config::Config, data::Dataset, table};

/// Interactively review the bundled reference tables
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Review {
    /// Load study data from a different JSON file
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::VariantArray)]
enum MenuChoice {
    #[strum(to_string = "Review Ports & Protocols")]
    PortsProtocols,
    #[strum(to_string = "Review Command Line")]
    CommandLine,
    #[strum(to_string = "Exit")]
    Exit,
}

impl super::Command for Review {
    fn execute(self) -> eyre::Result<()> {
        let config = Config::load()?;

        if config.no_color {
            colored::control::set_override(false);
        }

        let dataset = Dataset::load(self.data.as_deref(), &config)?;

        print_banner();

        loop {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("What would you like to do?")
                .items(MenuChoice::VARIANTS)
                .default(0)
                .interact_opt();

            // Esc, q, and a closed stdin all mean the user is done
            let choice = match selection {
                Ok(Some(index)) => MenuChoice::VARIANTS[index],
                Ok(None) => MenuChoice::Exit,
                Err(e) => {
                    tracing::debug!("Prompt closed: {e}");
                    MenuChoice::Exit
                }
            };

            match choice {
                MenuChoice::PortsProtocols => {
                    let mut table = table::ports_table(&dataset.ports_protocols);
                    if config.no_color {
                        table.force_no_tty();
                    }
                    println!("{table}");
                }
                MenuChoice::CommandLine => {
                    let mut table = table::command_line_table(&dataset.command_line);
                    if config.no_color {
                        table.force_no_tty();
                    }
                    println!("{table}");
                }
                MenuChoice::Exit => {
                    println!("\n{}", "Thank you for studying today.".bold());
                    break;
                }
            }
        }

        Ok(())
    }
}

fn print_banner() {
    let title = "CompTIA A+ Study Tool";
    let rule = "═".repeat(title.len() + 4);

    println!("╔{rule}╗");
    println!("║  {}  ║", title.bold().cyan());
    println!("╚{rule}╝");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_both_datasets_then_exit() {
        let labels = MenuChoice::VARIANTS
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        assert_eq!(
            labels,
            vec!["Review Ports & Protocols", "Review Command Line", "Exit"]
        );
    }

    #[test]
    fn exit_is_the_last_choice() {
        assert_eq!(MenuChoice::VARIANTS.last(), Some(&MenuChoice::Exit));
    }
}
