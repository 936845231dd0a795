use std::collections::BTreeMap;

use serde_json::Value;

/// One row of data, keyed by column key.
pub type Record = BTreeMap<String, Value>;

/// Unformatted cell text for a value.
///
/// Strings are used as they are, null and missing values are empty, and
/// everything else is rendered as JSON.
pub fn raw_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
