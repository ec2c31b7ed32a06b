//! Application service: upload and run a bootstrap script on every target.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, OutputSink};
use crate::application::services::dispatch::Dispatcher;
use crate::domain::{Action, Command, ConfigError, DispatchReport, Host, Plan};

/// The three bootstrap passes for `script`: upload, mark executable, run.
///
/// # Errors
///
/// Returns an error if `script` has no file name component.
pub fn bootstrap_plan(targets: &[Host], script: &Path) -> Result<Plan> {
    let name = script
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ConfigError::ScriptName(script.to_path_buf()))?;
    Ok(Plan::step_major(
        targets,
        vec![
            Action::Copy {
                source: script.to_path_buf(),
                recursive: false,
            },
            Action::Exec(Command::new(["chmod", "+x", name])),
            Action::Exec(Command::new([format!("./{name}")])),
        ],
    ))
}

/// Bootstrap every target with `script`.
///
/// # Errors
///
/// Returns an error before any remote work if the script is missing or has
/// no usable file name.
pub async fn bootstrap(
    dispatcher: &Dispatcher<'_, impl CommandRunner, impl OutputSink>,
    targets: &[Host],
    script: &Path,
) -> Result<DispatchReport> {
    if !script.is_file() {
        return Err(ConfigError::SourceNotFound(script.to_path_buf()).into());
    }
    let plan = bootstrap_plan(targets, script)?;
    Ok(dispatcher.run(&plan).await)
}
