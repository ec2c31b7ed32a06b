//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::{ExitStatus, Output};
use std::time::Duration;

use anyhow::Result;

use crate::domain::{Host, OutputStream, RdConfig};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
    /// Run a program to completion, handing every stdout/stderr line to
    /// `on_line` as soon as it is produced. No timeout applies.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    /// A non-zero exit is reported through the returned status, not as `Err`.
    async fn run_streaming(
        &self,
        program: &str,
        args: &[&str],
        on_line: &mut dyn FnMut(OutputStream, &str),
    ) -> Result<ExitStatus>;
}

// ── Host Directory Port ───────────────────────────────────────────────────────

/// Source of the fleet's host records.
#[allow(async_fn_in_trait)]
pub trait HostDirectory {
    /// Discover every host, in directory order.
    async fn hosts(&self) -> Result<Vec<Host>>;
}

// ── Output Sink Port ──────────────────────────────────────────────────────────

/// Receives host-tagged execution output. Sync trait; no async needed.
pub trait OutputSink {
    /// Called once before an invocation starts, with the full local command line.
    fn running(&self, host: &Host, invocation: &str);
    /// Called for every output line, in the order the process produced it.
    fn line(&self, host: &Host, stream: OutputStream, line: &str);
}

// ── Object Store Port ─────────────────────────────────────────────────────────

/// Read access to the remote configuration bucket.
#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    /// Fetch the full contents of `bucket/key`.
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the rd configuration file.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when no file exists.
    fn load(&self) -> Result<RdConfig>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
