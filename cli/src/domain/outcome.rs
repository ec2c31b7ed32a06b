//! Execution outcomes and the per-dispatch report.

use std::fmt;

use crate::domain::host::Host;

/// Which pipe a remote output line came from. Both are displayed identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Terminal status of one `(host, action)` execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecStatus {
    Succeeded,
    /// The process ran and exited non-zero (`None` when killed by a signal).
    Failed { code: Option<i32> },
    /// The remote-access tool could not be started.
    Unreachable { reason: String },
}

impl ExecStatus {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for ExecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => f.write_str("ok"),
            Self::Failed { code: Some(code) } => write!(f, "exit code {code}"),
            Self::Failed { code: None } => f.write_str("terminated by signal"),
            Self::Unreachable { reason } => write!(f, "unreachable: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    pub host: Host,
    /// Human-readable description of the action that ran.
    pub action: String,
    pub status: ExecStatus,
}

/// Every outcome of one dispatch, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    outcomes: Vec<ExecOutcome>,
}

impl DispatchReport {
    pub fn record(&mut self, outcome: ExecOutcome) {
        self.outcomes.push(outcome);
    }

    #[must_use]
    pub fn outcomes(&self) -> &[ExecOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExecOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_success())
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
