//! Ordered dispatch plans: which action runs on which host, in what order.

use std::fmt;
use std::path::PathBuf;

use crate::domain::command::Command;
use crate::domain::host::Host;

/// A single unit of remote work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a command on the host.
    Exec(Command),
    /// Copy a local path into the remote user's home directory.
    Copy { source: PathBuf, recursive: bool },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exec(command) => fmt::Display::fmt(command, f),
            Self::Copy { source, recursive } => {
                let flag = if *recursive { " -r" } else { "" };
                write!(f, "copy{flag} {}", source.display())
            }
        }
    }
}

/// One `(host, action)` pair in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub host: Host,
    pub action: Action,
}

/// The complete, ordered list of invocations for one dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    invocations: Vec<Invocation>,
}

impl Plan {
    /// Step-major ordering: every target completes action N before any
    /// target starts action N+1.
    #[must_use]
    pub fn step_major(targets: &[Host], actions: Vec<Action>) -> Self {
        let invocations = actions
            .into_iter()
            .flat_map(|action| {
                targets.iter().map(move |host| Invocation {
                    host: host.clone(),
                    action: action.clone(),
                })
            })
            .collect();
        Self { invocations }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Invocation> {
        self.invocations.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Invocation;
    type IntoIter = std::slice::Iter<'a, Invocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
