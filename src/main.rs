use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod macros;
mod utils;

// Add commands here
//
// Format:
// name, alias => reference::to::Command,
// name => reference::to::Command,
//
// Name should be in camel case
define_commands! {
    Review, r => commands::review::Review,
    Ports, p => commands::ports::Ports,
    CommandLine, cl => commands::command_line::CommandLine,
    Dump, d => commands::dump::Dump,
    Demo => commands::demo::Demo
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::Targets::new().with_target(
            "aplus_rs",
            if cli.verbose {
                tracing::Level::DEBUG
            } else {
                tracing::Level::WARN
            },
        ))
        .init();

    // Launching with no subcommand drops straight into the study menu
    cli.command
        .unwrap_or_else(|| Commands::Review(commands::review::Review::default()))
        .execute()
}
