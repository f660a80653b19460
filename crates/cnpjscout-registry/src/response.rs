use crate::{RegistryError, Result};
use cnpjscout_core::{CompanyRecord, SearchResults};
use serde_json::Value;
use tracing::{debug, warn};

/// How much of a response body ends up in debug logs.
pub const BODY_LOG_LIMIT: usize = 500;

/// Reads the `records` array of a registry response, keeping order.
/// A response without records is an empty result, not an error.
pub fn parse_records(body: &str) -> Result<SearchResults> {
    let document: Value =
        serde_json::from_str(body).map_err(|err| RegistryError::Parse(err.to_string()))?;

    let Some(items) = document.get("records").and_then(Value::as_array) else {
        debug!("response carries no records array");
        return Ok(SearchResults::default());
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            warn!(index, "skipping registry record that is not an object");
            continue;
        }
        records.push(CompanyRecord::from_value(item));
    }

    debug!(count = records.len(), "parsed registry records");
    Ok(SearchResults::new(records))
}

pub fn snippet(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
