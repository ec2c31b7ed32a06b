//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::{DispatchReport, Host};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Print `name public private` per host. This is the command's payload,
    /// so it is printed even in quiet mode.
    pub fn render_hosts(&self, hosts: &[Host]) {
        for host in hosts {
            println!(
                "{} {} {}",
                host.name, host.public_address, host.private_address
            );
        }
    }

    /// List the resolved targets before running an ad-hoc command.
    pub fn render_targets(&self, targets: &[Host]) {
        if self.ctx.quiet {
            return;
        }
        for host in targets {
            println!("{host}");
        }
    }

    /// Note that nothing will run because no host matched.
    pub fn render_no_targets(&self) {
        self.ctx.info("No hosts matched; nothing to do.");
    }

    /// Summarize a finished dispatch. Failures are listed on stderr.
    pub fn render_report(&self, report: &DispatchReport) {
        let failures: Vec<_> = report.failures().collect();
        if failures.is_empty() {
            if !report.is_empty() {
                self.ctx
                    .success(&format!("{} executions completed", report.len()));
            }
            return;
        }

        self.ctx.error(&format!(
            "{} of {} executions failed:",
            failures.len(),
            report.len()
        ));
        for outcome in failures {
            eprintln!(
                "    {}  {}  ({})",
                outcome.host.name.style(self.ctx.styles.bold),
                outcome.action,
                outcome.status.style(self.ctx.styles.dim)
            );
        }
    }
}
