//! Decoding feed bodies into seeds.
//!
//! Accepted shapes:
//!
//! ```text
//! [ {"id": "r1", "image_name": ..., ...}, ... ]     flat, explicit ids
//! [ {"image_name": ..., "report_url": ...}, ... ]   flat, ids derived as api-{index}
//! { "pending": [...], "in_progress": [...] }        partitioned, missing stages empty
//! null / empty body                                 flat, no reports
//! ```

use serde_json::Value;
use triage_models::{LegacyReport, PartitionedSeed, Report, Seed};

use crate::error::{FeedError, Result};

const STAGE_KEYS: [&str; 3] = ["pending", "in_progress", "completed"];

/// Decodes a feed body.
pub fn decode_seed(body: &str) -> Result<Seed> {
    if body.trim().is_empty() {
        return Ok(Seed::default());
    }

    match serde_json::from_str::<Value>(body)? {
        Value::Null => Ok(Seed::default()),
        Value::Array(entries) => decode_flat(entries).map(Seed::Flat),
        Value::Object(map) => {
            if !map.is_empty() && !STAGE_KEYS.iter().any(|k| map.contains_key(*k)) {
                return Err(FeedError::Format(
                    "object has none of pending, in_progress, completed".to_string(),
                ));
            }
            let seed: PartitionedSeed = serde_json::from_value(Value::Object(map))?;
            Ok(Seed::Partitioned(seed))
        }
        other => Err(FeedError::Format(format!(
            "expected an array or an object, got {}",
            kind(&other)
        ))),
    }
}

fn decode_flat(entries: Vec<Value>) -> Result<Vec<Report>> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if entry.get("id").is_some_and(|id| !id.is_null()) {
                Ok(serde_json::from_value::<Report>(entry)?)
            } else {
                let legacy: LegacyReport = serde_json::from_value(entry)?;
                Ok(legacy.into_report(index))
            }
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
