//! `rd run`: run an arbitrary command on every selected host.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::TargetArgs;
use crate::domain::{Action, Command, Plan};

/// Arguments for the run command.
#[derive(Args, Debug)]
#[command(trailing_var_arg = true)]
pub struct RunArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Command and arguments to run on each host
    #[arg(required = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Run `rd run`.
///
/// # Errors
///
/// Returns an error if targets cannot be resolved.
pub async fn run(app: &AppContext, args: &RunArgs) -> Result<ExitCode> {
    let targets = app.resolve(&args.targets.criteria()).await?;
    if targets.is_empty() {
        app.renderer().render_no_targets();
        return Ok(ExitCode::SUCCESS);
    }
    app.renderer().render_targets(&targets);

    let plan = Plan::step_major(
        &targets,
        vec![Action::Exec(Command::new(args.command.iter().cloned()))],
    );
    let sink = app.sink();
    let report = app.dispatcher(&sink).run(&plan).await;
    Ok(app.finish(&report))
}
