//! JSON output helpers for `--json` code paths.

use anyhow::{Context, Result};

use crate::domain::Host;

/// Format the host list as a pretty-printed JSON array.
///
/// ```json
/// [
///   { "name": "web-1", "public_address": "203.0.113.1", "private_address": "10.0.0.1" }
/// ]
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_hosts(hosts: &[Host]) -> Result<String> {
    serde_json::to_string_pretty(hosts).context("JSON serialization failed")
}
