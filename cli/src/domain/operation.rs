//! Fleet operations as data: each operation is an ordered list of step templates.
//!
//! Pure functions only: no I/O, no async.

use std::fmt;

use crate::domain::command::Command;
use crate::domain::host::Host;
use crate::domain::plan::{Action, Plan};

/// One command template within an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTemplate {
    /// Tokens always present in the command.
    pub base: &'static [&'static str],
    /// Whether the user-supplied argument (e.g. a service name) is appended.
    pub takes_arg: bool,
}

impl StepTemplate {
    /// Render this step with the optional user argument.
    #[must_use]
    pub fn render(&self, arg: &str) -> Command {
        if self.takes_arg {
            Command::with_optional_arg(self.base, arg)
        } else {
            Command::new(self.base.iter().copied())
        }
    }
}

const UP: StepTemplate = StepTemplate {
    base: &["docker", "compose", "up", "-d"],
    takes_arg: true,
};
const PULL: StepTemplate = StepTemplate {
    base: &["docker", "compose", "pull"],
    takes_arg: true,
};
const RESTART: StepTemplate = StepTemplate {
    base: &["docker", "compose", "restart"],
    takes_arg: true,
};
const STOP: StepTemplate = StepTemplate {
    base: &["docker", "compose", "stop"],
    takes_arg: true,
};
const LOGS: StepTemplate = StepTemplate {
    base: &["docker", "compose", "logs", "-f"],
    takes_arg: true,
};
const COMPOSE_STATUS: StepTemplate = StepTemplate {
    base: &["docker", "compose", "ps"],
    takes_arg: false,
};
const DOCKER_STATUS: StepTemplate = StepTemplate {
    base: &["docker", "ps"],
    takes_arg: false,
};

/// A named, ordered sequence of remote commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    Update,
    Restart,
    Reboot,
    Logs,
    Ps,
}

impl Operation {
    pub const ALL: [Self; 6] = [
        Self::Start,
        Self::Update,
        Self::Restart,
        Self::Reboot,
        Self::Logs,
        Self::Ps,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Update => "update",
            Self::Restart => "restart",
            Self::Reboot => "reboot",
            Self::Logs => "logs",
            Self::Ps => "ps",
        }
    }

    /// The ordered step table for this operation.
    #[must_use]
    pub fn steps(self) -> &'static [StepTemplate] {
        match self {
            Self::Start => &[UP, COMPOSE_STATUS],
            Self::Update => &[PULL, DOCKER_STATUS],
            Self::Restart => &[RESTART, DOCKER_STATUS],
            // Two full stop passes before bringing services back up.
            Self::Reboot => &[STOP, STOP, UP, DOCKER_STATUS],
            Self::Logs => &[LOGS],
            Self::Ps => &[COMPOSE_STATUS],
        }
    }

    /// Render every step with the optional user argument.
    #[must_use]
    pub fn commands(self, arg: &str) -> Vec<Command> {
        self.steps().iter().map(|step| step.render(arg)).collect()
    }

    /// Build the full dispatch plan across `targets`.
    #[must_use]
    pub fn plan(self, targets: &[Host], arg: &str) -> Plan {
        let actions = self.commands(arg).into_iter().map(Action::Exec).collect();
        Plan::step_major(targets, actions)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
