use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortmanteauError {
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("No portmanteau candidates survived filtering")]
    EmptyCandidatesError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<serde_json::Error> for PortmanteauError {
    fn from(e: serde_json::Error) -> Self {
        PortmanteauError::ParseError {
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortmanteauError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortmanteauError::TransportError(_) => ErrorCategory::Network,
            PortmanteauError::ParseError { .. } | PortmanteauError::EmptyCandidatesError => {
                ErrorCategory::Data
            }
            PortmanteauError::TomlError(_)
            | PortmanteauError::ConfigError { .. }
            | PortmanteauError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PortmanteauError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // an empty result is a normal outcome of a search, not a failure
            PortmanteauError::EmptyCandidatesError => ErrorSeverity::Low,
            PortmanteauError::TransportError(_) | PortmanteauError::ParseError { .. } => {
                ErrorSeverity::Medium
            }
            PortmanteauError::TomlError(_)
            | PortmanteauError::ConfigError { .. }
            | PortmanteauError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PortmanteauError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortmanteauError::TransportError(_) => {
                "Could not reach the portmanteau service".to_string()
            }
            PortmanteauError::ParseError { .. } => {
                "The portmanteau service returned something unreadable".to_string()
            }
            PortmanteauError::EmptyCandidatesError => "No portmanteau found".to_string(),
            PortmanteauError::IoError(e) => format!("File access failed: {}", e),
            PortmanteauError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            PortmanteauError::ConfigError { message } => format!("Bad configuration: {}", message),
            PortmanteauError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad value for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortmanteauError::TransportError(_) => {
                "Check your network connection and the --endpoint value"
            }
            PortmanteauError::ParseError { .. } => {
                "Check that --endpoint and --function point at the RhymeBrain API"
            }
            PortmanteauError::EmptyCandidatesError => {
                "Try a different word or lower the --threshold"
            }
            PortmanteauError::IoError(_) => "Check the file path and its permissions",
            PortmanteauError::TomlError(_) | PortmanteauError::ConfigError { .. } => {
                "Fix the config file and run again"
            }
            PortmanteauError::InvalidConfigValueError { .. } => {
                "Correct the reported value and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PortmanteauError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_errors_become_parse_errors() {
        let err: PortmanteauError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, PortmanteauError::ParseError { .. }));
        assert_eq!(err.category(), ErrorCategory::Data);
    }

    #[test]
    fn test_empty_candidates_is_low_severity() {
        let err = PortmanteauError::EmptyCandidatesError;
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "No portmanteau found");
    }

    #[test]
    fn test_config_errors_outrank_data_errors() {
        let config = PortmanteauError::ConfigError {
            message: "missing".to_string(),
        };
        let parse = PortmanteauError::ParseError {
            message: "bad".to_string(),
        };
        assert!(config.severity() > parse.severity());
    }
}
