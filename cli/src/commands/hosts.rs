//! `rd hosts`: list hosts from infrastructure state.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::TargetArgs;
use crate::output::json;

/// Arguments for the hosts command.
#[derive(Args, Debug)]
pub struct HostsArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run `rd hosts`.
///
/// # Errors
///
/// Returns an error if the host directory cannot be read.
pub async fn run(app: &AppContext, args: &HostsArgs) -> Result<ExitCode> {
    let targets = app.resolve(&args.targets.criteria()).await?;
    if args.json {
        println!("{}", json::format_hosts(&targets)?);
    } else {
        app.renderer().render_hosts(&targets);
    }
    Ok(ExitCode::SUCCESS)
}
