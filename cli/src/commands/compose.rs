//! `rd start|update|restart|reboot|logs|ps`: docker compose operations.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::ServiceArgs;
use crate::domain::Operation;

/// Run one compose operation across the selected hosts.
///
/// # Errors
///
/// Returns an error if targets cannot be resolved. Per-host failures are
/// summarized after the dispatch instead.
pub async fn run(app: &AppContext, operation: Operation, args: &ServiceArgs) -> Result<ExitCode> {
    let targets = app.resolve(&args.targets.criteria()).await?;
    if targets.is_empty() {
        app.renderer().render_no_targets();
        return Ok(ExitCode::SUCCESS);
    }

    let sink = app.sink();
    let report = app
        .dispatcher(&sink)
        .run_operation(operation, &targets, args.service.as_deref().unwrap_or(""))
        .await;
    Ok(app.finish(&report))
}
