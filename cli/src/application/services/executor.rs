//! Application service: run one action on one host.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Execution failures are returned as values; they never abort the caller.

use crate::application::ports::{CommandRunner, OutputSink};
use crate::domain::{Action, ExecOutcome, ExecStatus, Host, OutputStream, RemoteAccess};

/// Run `action` on `host`, streaming host-tagged output into `sink`.
///
/// Blocks until the remote-access process exits. A spawn failure is written
/// to the sink as a stderr line and reported as [`ExecStatus::Unreachable`].
pub async fn execute(
    runner: &impl CommandRunner,
    sink: &impl OutputSink,
    remote: &RemoteAccess,
    host: &Host,
    action: &Action,
) -> ExecOutcome {
    let spec = remote.invocation(host, action);
    sink.running(host, &spec.to_string());

    let mut on_line = |stream: OutputStream, line: &str| sink.line(host, stream, line);
    let args = spec.arg_refs();
    let result = runner
        .run_streaming(&spec.program, &args, &mut on_line)
        .await;
    let status = match result {
        Ok(status) if status.success() => ExecStatus::Succeeded,
        Ok(status) => ExecStatus::Failed {
            code: status.code(),
        },
        Err(e) => {
            let reason = format!("{e:#}");
            sink.line(host, OutputStream::Stderr, &reason);
            ExecStatus::Unreachable { reason }
        }
    };

    tracing::debug!(host = %host.name, %action, %status, "execution finished");
    ExecOutcome {
        host: host.clone(),
        action: action.to_string(),
        status,
    }
}
