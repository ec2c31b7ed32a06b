//! Application service: target resolution use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};

use crate::application::ports::HostDirectory;
use crate::domain::target::{self, FilterCriteria};
use crate::domain::Host;

/// Discover the fleet and select the hosts matching `criteria`.
///
/// # Errors
///
/// Returns an error if the host directory cannot be read. Resolution errors
/// are fatal: nothing should be dispatched when this fails.
pub async fn resolve_targets(
    directory: &impl HostDirectory,
    criteria: &FilterCriteria,
) -> Result<Vec<Host>> {
    let hosts = directory
        .hosts()
        .await
        .context("cannot read host directory")?;
    let targets = target::resolve(&hosts, criteria);
    tracing::debug!(
        discovered = hosts.len(),
        selected = targets.len(),
        ?criteria,
        "resolved targets"
    );
    Ok(targets)
}
