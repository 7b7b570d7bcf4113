use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Word handed to the API, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SearchQuery {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

/// One element of the `getPortmanteaus` response array.
///
/// Both fields are optional so a record with a missing or non-text field
/// can be skipped without failing the whole array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortmanteauRecord {
    #[serde(default, deserialize_with = "text_or_none")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub combined: Option<String>,
}

fn text_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

pub type CandidateList = Vec<String>;

/// Result of one search run, rendered by the screen.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub word: String,
    pub request_url: String,
    pub candidate_count: usize,
    pub portmanteau: Option<String>,
    pub searched_at: DateTime<Utc>,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.portmanteau.is_some()
    }
}
