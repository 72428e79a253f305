pub mod command_line;
pub mod demo;
pub mod dump;
pub mod ports;
pub mod review;

pub trait Command: clap::Parser {
    fn execute(self) -> eyre::Result<()>;
}
