//! `rd bootstrap`: prepare hosts by uploading and running a setup script.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::bootstrap::bootstrap;
use crate::commands::TargetArgs;
use crate::infra::assets;

/// Arguments for the bootstrap command.
#[derive(Args, Debug)]
pub struct BootstrapArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Script to upload instead of the built-in one
    #[arg(long)]
    pub script: Option<PathBuf>,
}

/// Run `rd bootstrap`.
///
/// # Errors
///
/// Returns an error if the script cannot be prepared or targets cannot be resolved.
pub async fn run(app: &AppContext, args: &BootstrapArgs) -> Result<ExitCode> {
    // The temporary directory must outlive the upload.
    let (_guard, script) = match &args.script {
        Some(path) => (None, path.clone()),
        None => {
            let (dir, path) = assets::write_bootstrap_script()?;
            (Some(dir), path)
        }
    };

    let targets = app.resolve(&args.targets.criteria()).await?;
    if targets.is_empty() {
        app.renderer().render_no_targets();
        return Ok(ExitCode::SUCCESS);
    }

    if args.script.is_none() {
        app.output
            .info(&format!("Using built-in {}", assets::BOOTSTRAP_FILE_NAME));
    }
    let sink = app.sink();
    let report = bootstrap(&app.dispatcher(&sink), &targets, &script).await?;
    Ok(app.finish(&report))
}
