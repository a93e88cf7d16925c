//! Option items listed by the metadata endpoints.

use serde::{Deserialize, Serialize};

/// One entry of a dataset or variable list.
///
/// The metadata API sends more fields than these (units, scale, ...);
/// the combo box only needs the id and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: String,
    /// Human-readable label.
    pub value: String,
}

/// Parse the JSON array returned by a metadata endpoint.
pub fn parse_options(json: &str) -> anyhow::Result<Vec<OptionItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Add `id` to `values` if absent, remove it if present. Order is preserved.
pub fn toggle_value(values: &[String], id: &str) -> Vec<String> {
    if values.iter().any(|v| v == id) {
        values.iter().filter(|v| *v != id).cloned().collect()
    } else {
        let mut next = values.to_vec();
        next.push(id.to_string());
        next
    }
}

/// Id to select once options have loaded: `default` when nothing is
/// selected yet and the options list it.
pub fn default_selection(values: &[String], default: &str, options: &[OptionItem]) -> Option<String> {
    if !values.is_empty() || default.is_empty() {
        return None;
    }
    options
        .iter()
        .find(|o| o.id == default)
        .map(|o| o.id.clone())
}
