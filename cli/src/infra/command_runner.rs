//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with guaranteed timeout and kill on all platforms.

use std::process::{ExitStatus, Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

use crate::application::ports::CommandRunner;
use crate::domain::OutputStream;

/// Default timeout for captured local commands (`terraform show`, `aws s3 cp`).
pub const DEFAULT_CMD_TIMEOUT: Duration = Duration::from_secs(60);

/// Production `CommandRunner` backed by `tokio::process`.
///
/// Captured runs race the child against a timer and kill it explicitly on
/// timeout. Streaming runs have no timeout.
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_CMD_TIMEOUT)
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.run_with_timeout(program, args, self.timeout).await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        tracing::debug!(program, ?args, "running");
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    read_all(stdout_handle.as_mut()),
                    read_all(stderr_handle.as_mut()),
                );
                Ok(Output {
                    status: status.with_context(|| format!("waiting for {program}"))?,
                    stdout,
                    stderr,
                })
            } => result,
            () = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", timeout.as_secs())
            }
        }
    }

    async fn run_streaming(
        &self,
        program: &str,
        args: &[&str],
        on_line: &mut dyn FnMut(OutputStream, &str),
    ) -> Result<ExitStatus> {
        tracing::debug!(program, ?args, "streaming");
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout = child.stdout.take().context("stdout was not captured")?;
        let stderr = child.stderr.take().context("stderr was not captured")?;
        let mut out_lines = BufReader::new(stdout).split(b'\n');
        let mut err_lines = BufReader::new(stderr).split(b'\n');
        let (mut out_open, mut err_open) = (true, true);

        while out_open || err_open {
            tokio::select! {
                segment = out_lines.next_segment(), if out_open => {
                    out_open = deliver(segment, OutputStream::Stdout, on_line);
                }
                segment = err_lines.next_segment(), if err_open => {
                    err_open = deliver(segment, OutputStream::Stderr, on_line);
                }
            }
        }

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}

async fn read_all<R: AsyncRead + Unpin>(handle: Option<&mut R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(h) = handle {
        let _ = h.read_to_end(&mut buf).await;
    }
    buf
}

/// Hand one line to `on_line`. Returns `false` once the pipe is exhausted.
fn deliver(
    segment: std::io::Result<Option<Vec<u8>>>,
    stream: OutputStream,
    on_line: &mut dyn FnMut(OutputStream, &str),
) -> bool {
    match segment {
        Ok(Some(bytes)) => {
            let line = String::from_utf8_lossy(&bytes);
            on_line(stream, line.strip_suffix('\r').unwrap_or(&line));
            true
        }
        Ok(None) => false,
        Err(e) => {
            tracing::debug!(?stream, error = %e, "output pipe closed");
            false
        }
    }
}
