#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
pub use settings::SearchSettings;
pub use toml_config::TomlConfig;
