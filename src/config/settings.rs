use crate::core::extractor::DEFAULT_MIN_SOURCE_LENGTH;
use crate::core::query::{DEFAULT_ENDPOINT, DEFAULT_FUNCTION};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Resolved pipeline settings, whichever source they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub endpoint: String,
    pub function: String,
    pub min_source_length: usize,
    pub monitoring: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            function: DEFAULT_FUNCTION.to_string(),
            min_source_length: DEFAULT_MIN_SOURCE_LENGTH,
            monitoring: false,
        }
    }
}

impl ConfigProvider for SearchSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn function(&self) -> &str {
        &self.function
    }

    fn min_source_length(&self) -> usize {
        self.min_source_length
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring
    }
}

impl Validate for SearchSettings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("function", &self.function)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_rhymebrain() {
        let settings = SearchSettings::default();
        assert_eq!(settings.endpoint(), "http://rhymebrain.com/talk");
        assert_eq!(settings.function(), "getPortmanteaus");
        assert_eq!(settings.min_source_length(), 12);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_blank_function_is_rejected() {
        let settings = SearchSettings {
            function: " ".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
