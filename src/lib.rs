pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use app::screen::{render_text, DisplayState, SearchScreen};
pub use config::{SearchSettings, TomlConfig};
pub use core::{fetcher::HttpFetcher, search::PortmanteauSearch};
pub use utils::error::{PortmanteauError, Result};
