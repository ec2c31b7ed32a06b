//! Composition of remote-access process invocations.
//!
//! Builds the local argv that reaches a host through the external remote-access
//! tools. Nothing here spawns processes.

use std::fmt;

use crate::domain::host::Host;
use crate::domain::plan::Action;

/// A local process to spawn: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl ProcessSpec {
    #[must_use]
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for ProcessSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Identity and tools used to reach hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAccess {
    /// Remote login name.
    pub user: String,
    /// Program used to run commands remotely (`ssh`).
    pub ssh_program: String,
    /// Program used to copy files to hosts (`scp`).
    pub scp_program: String,
}

impl RemoteAccess {
    /// `user@public_address` for `host`.
    #[must_use]
    pub fn destination(&self, host: &Host) -> String {
        format!("{}@{}", self.user, host.public_address)
    }

    /// The local process that performs `action` on `host`.
    #[must_use]
    pub fn invocation(&self, host: &Host, action: &Action) -> ProcessSpec {
        match action {
            Action::Exec(command) => {
                let mut args = vec![self.destination(host)];
                args.extend(command.tokens().iter().cloned());
                ProcessSpec {
                    program: self.ssh_program.clone(),
                    args,
                }
            }
            Action::Copy { source, recursive } => {
                let mut args = Vec::with_capacity(3);
                if *recursive {
                    args.push("-r".to_string());
                }
                args.push(source.display().to_string());
                args.push(format!("{}:.", self.destination(host)));
                ProcessSpec {
                    program: self.scp_program.clone(),
                    args,
                }
            }
        }
    }
}
