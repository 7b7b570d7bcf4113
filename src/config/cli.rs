use crate::config::settings::SearchSettings;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "paulmanteaus")]
#[command(about = "Find an interesting portmanteau for a word via RhymeBrain")]
pub struct CliConfig {
    #[arg(long, default_value = "paul", help = "Word to search for")]
    pub word: String,

    #[arg(long, help = "Read one word per line from stdin and search each")]
    pub interactive: bool,

    #[arg(long, help = "TOML file with [source], [filter] and [monitoring] tables")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "RhymeBrain endpoint, without a query string")]
    pub endpoint: Option<String>,

    #[arg(long, help = "RhymeBrain function selector")]
    pub function: Option<String>,

    #[arg(long, help = "Keep records whose source is longer than this")]
    pub threshold: Option<usize>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process stats after each search phase")]
    pub monitor: bool,
}

impl CliConfig {
    /// Settings from `--config` (or the defaults), with explicit flags on top.
    pub fn settings(&self) -> Result<SearchSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                TomlConfig::from_file(path)?.to_settings()
            }
            None => SearchSettings::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(function) = &self.function {
            settings.function = function.clone();
        }
        if let Some(threshold) = self.threshold {
            settings.min_source_length = threshold;
        }
        if self.monitor {
            settings.monitoring = true;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["paulmanteaus"]);
        assert_eq!(config.word, "paul");
        assert!(!config.interactive);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.settings().unwrap(), SearchSettings::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[source]\nendpoint = \"https://file.example.com/talk\"\n[filter]\nmin_source_length = 4\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let config = CliConfig::parse_from([
            "paulmanteaus",
            "--config",
            path.as_str(),
            "--threshold",
            "20",
            "--format",
            "json",
        ]);
        let settings = config.settings().unwrap();

        assert_eq!(settings.endpoint, "https://file.example.com/talk");
        assert_eq!(settings.min_source_length, 20);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let config = CliConfig::parse_from([
            "paulmanteaus",
            "--config",
            "/nonexistent/paulmanteaus.toml",
        ]);
        assert!(config.settings().is_err());
    }
}
