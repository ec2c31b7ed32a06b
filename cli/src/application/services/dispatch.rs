//! Application service: the dispatch driver.
//!
//! Walks a [`Plan`] strictly in order, one invocation at a time, and collects
//! every outcome. A failing host never stops the remaining invocations.

use crate::application::ports::{CommandRunner, OutputSink};
use crate::application::services::executor;
use crate::domain::{DispatchReport, Host, Operation, Plan, RemoteAccess};

/// Sequential executor of dispatch plans.
pub struct Dispatcher<'a, R, S> {
    runner: &'a R,
    sink: &'a S,
    remote: &'a RemoteAccess,
}

impl<'a, R: CommandRunner, S: OutputSink> Dispatcher<'a, R, S> {
    #[must_use]
    pub fn new(runner: &'a R, sink: &'a S, remote: &'a RemoteAccess) -> Self {
        Self {
            runner,
            sink,
            remote,
        }
    }

    /// Execute every invocation of `plan` in order.
    pub async fn run(&self, plan: &Plan) -> DispatchReport {
        let mut report = DispatchReport::default();
        for invocation in plan {
            let outcome = executor::execute(
                self.runner,
                self.sink,
                self.remote,
                &invocation.host,
                &invocation.action,
            )
            .await;
            if !outcome.status.is_success() {
                tracing::warn!(
                    host = %outcome.host.name,
                    action = %outcome.action,
                    status = %outcome.status,
                    "remote execution failed; continuing"
                );
            }
            report.record(outcome);
        }
        report
    }

    /// Compose `operation` over `targets` and run it.
    pub async fn run_operation(
        &self,
        operation: Operation,
        targets: &[Host],
        arg: &str,
    ) -> DispatchReport {
        let plan = operation.plan(targets, arg);
        tracing::info!(%operation, targets = targets.len(), steps = plan.len(), "dispatching");
        self.run(&plan).await
    }
}
