//! The study datasets. Two record kinds ship with the binary: the
//! ports/protocols objectives and the command-line utilities, both
//! loaded from a single JSON document.
use std::path::{Path, PathBuf};

use eyre::Context;

use crate::utils::config::Config;

const BUNDLED_DATA: &str = include_str!("../data.json");

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PortProtocol {
    /// Kept as a string; entries like "20/21" and "137-139" cover
    /// multiple ports
    pub port_number: String,
    pub protocol_name: String,
    pub default_transport: String,
    pub description: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CommandLineEntry {
    pub command: String,
    pub utility: String,
    pub common_switch: String,
    pub scenario: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub ports_protocols: Vec<PortProtocol>,
    pub command_line: Vec<CommandLineEntry>,
}

impl Dataset {
    /// Load the study data. An explicit path wins over the user
    /// configuration, which wins over the copy bundled into the binary.
    /// A file that exists but does not parse is an error, never a
    /// silent fallback.
    pub fn load(override_path: Option<&Path>, config: &Config) -> eyre::Result<Self> {
        let path: Option<PathBuf> = override_path
            .map(Path::to_path_buf)
            .or_else(|| config.data_file.clone());

        let dataset: Dataset = match &path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("Could not read data file {}", p.display()))?;

                serde_json::from_str(&raw)
                    .with_context(|| format!("Could not parse data file {}", p.display()))?
            }
            None => serde_json::from_str(BUNDLED_DATA).context("Bundled data is malformed")?,
        };

        tracing::debug!(
            "Loaded {} port entries and {} command entries",
            dataset.ports_protocols.len(),
            dataset.command_line.len()
        );

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_parses() {
        let dataset = Dataset::load(None, &Config::default()).expect("bundled data must load");

        assert!(!dataset.ports_protocols.is_empty());
        assert!(!dataset.command_line.is_empty());
    }

    #[test]
    fn bundled_data_has_no_blank_fields() {
        let dataset = Dataset::load(None, &Config::default()).expect("bundled data must load");

        for entry in &dataset.ports_protocols {
            assert!(!entry.port_number.is_empty());
            assert!(!entry.protocol_name.is_empty());
            assert!(!entry.default_transport.is_empty());
            assert!(!entry.description.is_empty());
        }

        for entry in &dataset.command_line {
            assert!(!entry.command.is_empty());
            assert!(!entry.utility.is_empty());
            assert!(!entry.common_switch.is_empty());
            assert!(!entry.scenario.is_empty());
        }
    }

    #[test]
    fn bundled_data_covers_core_objectives() {
        let dataset = Dataset::load(None, &Config::default()).expect("bundled data must load");

        let ssh = dataset
            .ports_protocols
            .iter()
            .find(|p| p.protocol_name == "SSH")
            .expect("SSH entry present");
        assert_eq!(ssh.port_number, "22");
        assert_eq!(ssh.default_transport, "TCP");

        assert!(dataset.command_line.iter().any(|c| c.command == "ipconfig"));
        assert!(dataset.command_line.iter().any(|c| c.command == "chmod"));
    }

    #[test]
    fn explicit_path_overrides_bundled_data() {
        let path = std::env::temp_dir().join(format!("aplus-data-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{
                "ports_protocols": [{
                    "port_number": "8080",
                    "protocol_name": "HTTP-alt",
                    "default_transport": "TCP",
                    "description": "Alternate web port"
                }],
                "command_line": []
            }"#,
        )
        .expect("temp data file written");

        let dataset = Dataset::load(Some(&path), &Config::default()).expect("file must load");
        std::fs::remove_file(&path).ok();

        assert_eq!(dataset.ports_protocols.len(), 1);
        assert_eq!(dataset.ports_protocols[0].protocol_name, "HTTP-alt");
        assert!(dataset.command_line.is_empty());
    }

    #[test]
    fn missing_data_file_is_an_error() {
        let missing = Path::new("/nonexistent/aplus-data.json");
        assert!(Dataset::load(Some(missing), &Config::default()).is_err());
    }
}
