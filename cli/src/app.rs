//! Application context: unified state passed to every command handler.
//!
//! Configuration is loaded and the remote identity resolved exactly once here;
//! handlers never consult the environment themselves.

use std::process::ExitCode;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::application::services::dispatch::Dispatcher;
use crate::application::services::targets;
use crate::domain::{DispatchReport, FilterCriteria, Host, RdConfig, RemoteAccess};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::object_store::AwsCliObjectStore;
use crate::infra::terraform::TerraformDirectory;
use crate::output::{HumanRenderer, OutputContext, TerminalSink, progress};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Remote login override (`--user` / `RD_USER`).
    pub user: Option<String>,
    /// Turn per-host failures into a failing exit status.
    pub fail_on_error: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Effective configuration, user override applied.
    pub config: RdConfig,
    /// Identity and tools for reaching hosts.
    pub remote: RemoteAccess,
    /// Local process runner shared by every adapter.
    pub runner: TokioCommandRunner,
    /// When `true`, any failed host makes the process exit with status 1.
    pub fail_on_error: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        Self::with_store(flags, &YamlConfigStore)
    }

    /// Construct an `AppContext` loading configuration from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if `store` fails to load.
    pub fn with_store(flags: &AppFlags, store: &impl ConfigStore) -> Result<Self> {
        let config = store.load()?.with_user(flags.behaviour.user.clone());
        let remote = config.remote_access();
        tracing::debug!(user = %remote.user, infra_dir = %config.infra_dir.display(), "configuration loaded");

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            config,
            remote,
            runner: TokioCommandRunner::default(),
            fail_on_error: flags.behaviour.fail_on_error,
        })
    }

    #[must_use]
    pub fn host_directory(&self) -> TerraformDirectory<'_, TokioCommandRunner> {
        TerraformDirectory::new(
            &self.runner,
            self.config.programs.terraform.as_str(),
            self.config.infra_dir.as_path(),
        )
    }

    #[must_use]
    pub fn object_store(&self) -> AwsCliObjectStore<'_, TokioCommandRunner> {
        AwsCliObjectStore::new(
            &self.runner,
            self.config.programs.aws.as_str(),
            self.config.spaces_endpoint.as_str(),
        )
    }

    #[must_use]
    pub fn sink(&self) -> TerminalSink<'_> {
        TerminalSink::new(&self.output)
    }

    #[must_use]
    pub fn dispatcher<'a>(
        &'a self,
        sink: &'a TerminalSink<'a>,
    ) -> Dispatcher<'a, TokioCommandRunner, TerminalSink<'a>> {
        Dispatcher::new(&self.runner, sink, &self.remote)
    }

    #[must_use]
    pub fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output)
    }

    /// Read the host directory and select targets, with a spinner on TTYs.
    ///
    /// # Errors
    ///
    /// Returns an error if the host directory cannot be read.
    pub async fn resolve(&self, criteria: &FilterCriteria) -> Result<Vec<Host>> {
        let pb = progress::spinner_for(&self.output, "Reading infrastructure state...");
        let result = targets::resolve_targets(&self.host_directory(), criteria).await;
        if let Some(pb) = pb {
            match &result {
                Ok(hosts) => progress::finish_ok(&pb, &format!("{} hosts selected", hosts.len())),
                Err(_) => progress::finish_clear(&pb),
            }
        }
        result
    }

    /// Whether `report` should turn into a failing exit status.
    #[must_use]
    pub fn should_fail(&self, report: &DispatchReport) -> bool {
        self.fail_on_error && report.has_failures()
    }

    /// Print the dispatch summary and pick the process exit status.
    #[must_use]
    pub fn finish(&self, report: &DispatchReport) -> ExitCode {
        self.renderer().render_report(report);
        if self.should_fail(report) {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}
