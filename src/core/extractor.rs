use crate::domain::model::{CandidateList, PortmanteauRecord};
use crate::utils::error::{PortmanteauError, Result};

/// Records whose `source` is this long or shorter are not interesting.
pub const DEFAULT_MIN_SOURCE_LENGTH: usize = 12;

/// Turns a `getPortmanteaus` response body into candidate spellings.
///
/// Only records whose `source` is strictly longer than `min_source_length`
/// characters are kept; each contributes the first comma-separated segment
/// of its `combined` field. Elements that are not objects, or whose fields
/// are missing or not text, are skipped. Order follows the response array.
pub fn extract_candidates(body: &str, min_source_length: usize) -> Result<CandidateList> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(PortmanteauError::ParseError {
                message: format!("expected a JSON array, got {}", json_kind(&other)),
            })
        }
    };

    let total = items.len();
    let mut candidates = Vec::new();
    for item in items {
        let record: PortmanteauRecord = match serde_json::from_value(item) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Skipping malformed record: {}", e);
                continue;
            }
        };

        let Some(source) = record.source else {
            continue;
        };
        if source.chars().count() <= min_source_length {
            continue;
        }
        let Some(combined) = record.combined else {
            continue;
        };

        let first = combined.split(',').next().unwrap_or_default();
        candidates.push(first.to_string());
    }

    tracing::debug!("Kept {} of {} records", candidates.len(), total);
    Ok(candidates)
}

/// Same as [`extract_candidates`], but a body that can't be read yields an
/// empty list. The cause is logged.
pub fn extract_candidates_or_empty(body: &str, min_source_length: usize) -> CandidateList {
    match extract_candidates(body, min_source_length) {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("Could not read RhymeBrain response: {}", e);
            Vec::new()
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
