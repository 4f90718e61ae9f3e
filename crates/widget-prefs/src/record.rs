//! Persisted record encoding
//!
//! The record is a UTF-8 JSON array of `{"id", "label", "visible"}`
//! objects. Decoding is all-or-nothing: a record that is not exactly that
//! shape, or that repeats an id, is rejected as a whole.

use crate::error::RecordError;
use crate::types::WidgetConfig;
use std::collections::HashSet;

/// Parse persisted text into a widget sequence
///
/// # Errors
///
/// - `RecordError::Parse` if the text is not an array of well-formed records
/// - `RecordError::DuplicateId` if an id appears more than once
pub fn decode(text: &str) -> Result<Vec<WidgetConfig>, RecordError> {
    let widgets: Vec<WidgetConfig> = serde_json::from_str(text).map_err(RecordError::Parse)?;

    let mut seen = HashSet::with_capacity(widgets.len());
    for widget in &widgets {
        if !seen.insert(&widget.id) {
            return Err(RecordError::DuplicateId(widget.id.to_string()));
        }
    }

    Ok(widgets)
}

/// Serialize a widget sequence to its persisted text form
pub fn encode(widgets: &[WidgetConfig]) -> Result<String, RecordError> {
    serde_json::to_string(widgets).map_err(RecordError::Serialize)
}
