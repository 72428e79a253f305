use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::utils::{config::Config, data::Dataset, pager, table};

/// Render the command-line utilities reference table
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CommandLine {
    /// Load study data from a different JSON file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Disable the output pager
    #[arg(long)]
    no_pager: bool,
}

impl super::Command for CommandLine {
    fn execute(self) -> eyre::Result<()> {
        let config = Config::load()?;
        let dataset = Dataset::load(self.data.as_deref(), &config)?;

        let mut out = pager::get_pager_output(self.no_pager || config.no_pager);

        let mut table = table::command_line_table(&dataset.command_line);
        if config.no_color {
            table.force_no_tty();
        }

        writeln!(out, "{table}")?;

        Ok(())
    }
}
