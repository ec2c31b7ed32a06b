//! `rd config`: print a shared configuration object from the object store.

use std::io::Write as _;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::remote_config::fetch_config;
use crate::output::progress;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Bucket holding the configuration
    pub bucket: Option<String>,

    /// Object key within the bucket
    pub key: Option<String>,
}

/// Run `rd config`.
///
/// # Errors
///
/// Returns an error if bucket or key is missing or the fetch fails.
pub async fn run(app: &AppContext, args: &ConfigArgs) -> Result<ExitCode> {
    let bucket = args.bucket.as_deref().unwrap_or("");
    let key = args.key.as_deref().unwrap_or("");

    let pb = progress::spinner_for(&app.output, &format!("Fetching {bucket}/{key}..."));
    let result = fetch_config(&app.object_store(), bucket, key).await;
    if let Some(pb) = pb {
        progress::finish_clear(&pb);
    }
    let content = result?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&content).context("cannot write to stdout")?;
    if !content.ends_with(b"\n") {
        writeln!(stdout).context("cannot write to stdout")?;
    }
    Ok(ExitCode::SUCCESS)
}
