//! Shared test helpers: recording port doubles and output constructors.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{ExitStatus, Output};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use rd_cli::application::ports::{
    CommandRunner, ConfigStore, HostDirectory, ObjectStore, OutputSink,
};
use rd_cli::domain::{Host, OutputStream, RdConfig, RemoteAccess};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn h1() -> Host {
    Host::new("H1", "192.0.2.1", "10.0.0.1")
}

pub fn h2() -> Host {
    Host::new("H2", "192.0.2.2", "10.0.0.2")
}

pub fn remote() -> RemoteAccess {
    RemoteAccess {
        user: "root".into(),
        ssh_program: "ssh".into(),
        scp_program: "scp".into(),
    }
}

// ── Recording command runner ─────────────────────────────────────────────────

/// Records every process it is asked to run.
///
/// Streaming calls emit one stdout line (`ran <args>`) and one stderr line
/// (`warn`). Calls whose arguments mention a `failing` address exit 1; calls
/// mentioning an `unreachable` address fail to spawn.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<String>>,
    failing: Vec<String>,
    unreachable: Vec<String>,
    output: Option<Output>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, address: &str) -> Self {
        self.failing.push(address.to_string());
        self
    }

    pub fn unreachable(mut self, address: &str) -> Self {
        self.unreachable.push(address.to_string());
        self
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    /// Every recorded call as `program arg arg ...`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, program: &str, args: &[&str]) -> String {
        let joined = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.lock().expect("lock").push(joined.clone());
        joined
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.record(program, args);
        self.output
            .clone()
            .ok_or_else(|| anyhow::anyhow!("run not expected in this test"))
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        _timeout: Duration,
    ) -> Result<Output> {
        self.run(program, args).await
    }

    async fn run_streaming(
        &self,
        program: &str,
        args: &[&str],
        on_line: &mut dyn FnMut(OutputStream, &str),
    ) -> Result<ExitStatus> {
        let joined = self.record(program, args);
        if self.unreachable.iter().any(|a| joined.contains(a.as_str())) {
            anyhow::bail!("failed to spawn {program}: connection refused");
        }
        on_line(OutputStream::Stdout, &format!("ran {}", args.join(" ")));
        on_line(OutputStream::Stderr, "warn");
        let code = i32::from(self.failing.iter().any(|a| joined.contains(a.as_str())));
        Ok(exit_status(code))
    }
}

// ── Recording output sink ────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("lock").clone()
    }
}

impl OutputSink for RecordingSink {
    fn running(&self, host: &Host, invocation: &str) {
        self.events
            .lock()
            .expect("lock")
            .push(format!("{} running {invocation}", host.name));
    }

    fn line(&self, host: &Host, stream: OutputStream, line: &str) {
        self.events
            .lock()
            .expect("lock")
            .push(format!("{} {stream:?} {line}", host.name));
    }
}

// ── Host directories ─────────────────────────────────────────────────────────

pub struct StaticDirectory(pub Vec<Host>);

impl HostDirectory for StaticDirectory {
    async fn hosts(&self) -> Result<Vec<Host>> {
        Ok(self.0.clone())
    }
}

pub struct BrokenDirectory;

impl HostDirectory for BrokenDirectory {
    async fn hosts(&self) -> Result<Vec<Host>> {
        anyhow::bail!("terraform: state lock held")
    }
}

// ── Object store ─────────────────────────────────────────────────────────────

pub struct StaticStore {
    pub content: Vec<u8>,
    pub fetched: Mutex<Vec<String>>,
}

impl StaticStore {
    pub fn new(content: &[u8]) -> Self {
        Self {
            content: content.to_vec(),
            fetched: Mutex::new(Vec::new()),
        }
    }
}

impl ObjectStore for StaticStore {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.fetched
            .lock()
            .expect("lock")
            .push(format!("{bucket}/{key}"));
        Ok(self.content.clone())
    }
}

// ── Config store ─────────────────────────────────────────────────────────────

pub struct StaticConfig(pub RdConfig);

impl ConfigStore for StaticConfig {
    fn load(&self) -> Result<RdConfig> {
        Ok(self.0.clone())
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/nonexistent/config.yaml"))
    }
}

pub struct BrokenConfig;

impl ConfigStore for BrokenConfig {
    fn load(&self) -> Result<RdConfig> {
        anyhow::bail!("cannot parse /etc/rd/config.yaml")
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/etc/rd/config.yaml"))
    }
}
