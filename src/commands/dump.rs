use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::utils::{config::Config, data::Dataset};

/// Dump every record as JSON, one object per line, for debugging the
/// data file
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Dump {
    /// Load study data from a different JSON file
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Pretty-print each record instead of one object per line
    #[arg(long)]
    pretty: bool,
}

impl super::Command for Dump {
    fn execute(self) -> eyre::Result<()> {
        let config = Config::load()?;
        let dataset = Dataset::load(self.data.as_deref(), &config)?;

        let mut out = std::io::stdout().lock();

        for record in &dataset.ports_protocols {
            write_record(&mut out, record, self.pretty)?;
        }

        for record in &dataset.command_line {
            write_record(&mut out, record, self.pretty)?;
        }

        Ok(())
    }
}

fn write_record(
    out: &mut impl Write,
    record: &impl serde::Serialize,
    pretty: bool,
) -> eyre::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };

    writeln!(out, "{rendered}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::data::PortProtocol;

    fn sample() -> PortProtocol {
        PortProtocol {
            port_number: "443".to_string(),
            protocol_name: "HTTPS".to_string(),
            default_transport: "TCP".to_string(),
            description: "HTTP over TLS".to_string(),
        }
    }

    #[test]
    fn compact_output_is_one_json_object_per_line() {
        let mut out = Vec::new();
        write_record(&mut out, &sample(), false).expect("record written");

        let text = String::from_utf8(out).expect("utf8 output");
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value =
            serde_json::from_str(text.trim()).expect("line is valid JSON");
        assert_eq!(value["protocol_name"], "HTTPS");
    }

    #[test]
    fn pretty_output_spans_multiple_lines() {
        let mut out = Vec::new();
        write_record(&mut out, &sample(), true).expect("record written");

        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.lines().count() > 1);
        assert!(text.contains("\"port_number\": \"443\""));
    }
}
