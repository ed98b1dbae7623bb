//! JSON serialization for AUC estimates.

use crate::result::AucEstimate;

/// Serialize an estimate to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `AucEstimate`).
pub fn to_json(estimate: &AucEstimate) -> Result<String, serde_json::Error> {
    serde_json::to_string(estimate)
}

/// Serialize an estimate to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `AucEstimate`).
pub fn to_json_pretty(estimate: &AucEstimate) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(estimate)
}
