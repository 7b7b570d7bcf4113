use crate::config::settings::SearchSettings;
use crate::core::extractor::DEFAULT_MIN_SOURCE_LENGTH;
use crate::core::query::{DEFAULT_ENDPOINT, DEFAULT_FUNCTION};
use crate::utils::error::{PortmanteauError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File form of the search settings. Every table and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub function: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub min_source_length: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortmanteauError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${RHYMEBRAIN_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortmanteauError::ConfigError {
            message: format!("env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn to_settings(&self) -> SearchSettings {
        SearchSettings {
            endpoint: self
                .source
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            function: self
                .source
                .function
                .clone()
                .unwrap_or_else(|| DEFAULT_FUNCTION.to_string()),
            min_source_length: self
                .filter
                .min_source_length
                .unwrap_or(DEFAULT_MIN_SOURCE_LENGTH),
            monitoring: self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_settings().validate()
    }
}
