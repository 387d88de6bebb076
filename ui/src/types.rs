//! DTOs shared with the picklist demo host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named option list served by the host.
///
/// `options` stays raw JSON here; `parse_options` turns it into typed
/// options (and rejects malformed entries) at the widget boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub track_by: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub options: Vec<Value>,
}
