//! Application service: copy a local file or directory to every target.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, OutputSink};
use crate::application::services::dispatch::Dispatcher;
use crate::domain::{Action, ConfigError, DispatchReport, Host, Plan};

/// Copy `source` into the remote user's home directory on each target.
///
/// # Errors
///
/// Returns an error before any copy starts if `source` does not exist.
/// Per-host copy failures are reported in the returned [`DispatchReport`].
pub async fn sync_files(
    dispatcher: &Dispatcher<'_, impl CommandRunner, impl OutputSink>,
    targets: &[Host],
    source: &Path,
    recursive: bool,
) -> Result<DispatchReport> {
    if !source.exists() {
        return Err(ConfigError::SourceNotFound(source.to_path_buf()).into());
    }
    let plan = Plan::step_major(
        targets,
        vec![Action::Copy {
            source: source.to_path_buf(),
            recursive,
        }],
    );
    Ok(dispatcher.run(&plan).await)
}
