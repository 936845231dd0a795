//! Column layout and row behaviour of the log overview.

use celldom::Size;
use chrono::DateTime;
use serde_json::Value;

use crate::column::{Column, Columns};
use crate::record::{raw_text, Record};
use crate::rows::RowParams;

/// Row handler that opens the log entry.
pub const OPEN_ENTRY: &str = "open-entry";

/// Row data key holding the entry id.
pub const ENTRY_ID: &str = "entry-id";

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Columns of the log overview, keyed like the log API's records.
pub fn log_columns() -> Columns {
    Columns::new(vec![
        Column::new("id", "ID").primary().size(Size::Fixed(6)),
        Column::new("title", "Title")
            .size(Size::Percent(0.25))
            .expandable(),
        Column::new("authorId", "Author").size(Size::Fixed(12)),
        Column::new("creationTime", "Created")
            .size(Size::Fixed(17))
            .format(format_timestamp),
        Column::new("origin", "Origin").hidden(),
        Column::new("text", "Text").expandable(),
    ])
}

/// Format epoch milliseconds as a date; other values are shown raw.
pub fn format_timestamp(value: &Value) -> String {
    value
        .as_i64()
        .and_then(DateTime::from_timestamp_millis)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| raw_text(Some(value)))
}

/// Row parameters that make a click on the row open its entry.
pub fn open_entry(record: &Record) -> RowParams {
    RowParams::new()
        .class("clickable")
        .on_click(OPEN_ENTRY)
        .data(ENTRY_ID, raw_text(record.get("id")))
}

/// Page address of a log entry.
pub fn entry_url(id: &str) -> String {
    format!("?page=entry&id={id}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_log_columns_have_one_primary() {
        let columns = log_columns();
        assert_eq!(columns.primary().unwrap().key, "id");
        assert!(!columns.get("origin").unwrap().visible);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&json!(0)), "01/01/1970 00:00");
        assert_eq!(format_timestamp(&json!(1_546_300_800_000_i64)), "01/01/2019 00:00");
        assert_eq!(format_timestamp(&json!("yesterday")), "yesterday");
        assert_eq!(format_timestamp(&Value::Null), "");
    }

    #[test]
    fn test_open_entry_params() {
        let record: Record = [("id".to_string(), json!(3))].into_iter().collect();
        let params = open_entry(&record);
        assert_eq!(params.on_click.as_deref(), Some(OPEN_ENTRY));
        assert_eq!(params.data, vec![(ENTRY_ID.to_string(), "3".to_string())]);
        assert_eq!(entry_url("3"), "?page=entry&id=3");
    }
}
