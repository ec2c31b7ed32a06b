//! `rd sync`: copy a local file to every selected host.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::sync::sync_files;
use crate::commands::TargetArgs;

/// Arguments for the sync command.
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Sync recursively like scp -r
    #[arg(short, long)]
    pub recursive: bool,

    /// Local file or directory to copy
    #[arg(default_value = "docker-compose.yml")]
    pub file: PathBuf,
}

/// Run `rd sync`.
///
/// # Errors
///
/// Returns an error if targets cannot be resolved or the local path is missing.
pub async fn run(app: &AppContext, args: &SyncArgs) -> Result<ExitCode> {
    let targets = app.resolve(&args.targets.criteria()).await?;
    if targets.is_empty() {
        app.renderer().render_no_targets();
        return Ok(ExitCode::SUCCESS);
    }

    let sink = app.sink();
    let report = sync_files(&app.dispatcher(&sink), &targets, &args.file, args.recursive).await?;
    Ok(app.finish(&report))
}
