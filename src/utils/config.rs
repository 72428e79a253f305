use std::path::PathBuf;

use eyre::Context;

/// Optional user overrides, read from `aplus-rs/config.toml` under the
/// platform configuration directory. A missing file means defaults; a
/// file that fails to parse is an error.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replacement study data file
    pub data_file: Option<PathBuf>,

    /// Never pipe table output through a pager
    pub no_pager: bool,

    /// Strip colors and styling from all output
    pub no_color: bool,
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aplus-rs").join("config.toml"))
    }

    pub fn load() -> eyre::Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read configuration {}", path.display()))?;

        let config = toml::from_str(&raw)
            .with_context(|| format!("Could not parse configuration {}", path.display()))?;

        tracing::debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let config = Config::default();

        assert!(config.data_file.is_none());
        assert!(!config.no_pager);
        assert!(!config.no_color);
    }

    #[test]
    fn partial_config_parses() {
        let config: Config = toml::from_str("no_pager = true").expect("partial config parses");

        assert!(config.no_pager);
        assert!(!config.no_color);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            data_file = "/tmp/study.json"
            no_pager = true
            no_color = true
            "#,
        )
        .expect("full config parses");

        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/study.json")));
        assert!(config.no_pager);
        assert!(config.no_color);
    }
}
