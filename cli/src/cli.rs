//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;
use crate::domain::Operation;
use crate::output::logging;

/// rd stands for remote docker
#[derive(Parser)]
#[command(
    name = "rd",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Remote login name [default: root]
    #[arg(long, global = true, env = "RD_USER")]
    pub user: Option<String>,

    /// Exit with status 1 when any host fails
    #[arg(
        long,
        global = true,
        env = "RD_FAIL_ON_ERROR",
        value_parser = FalseyValueParser::new()
    )]
    pub fail_on_error: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Increase diagnostic logging (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Bring services up, then show compose status
    Start(commands::ServiceArgs),

    /// Pull images, then show running containers
    #[command(visible_alias = "pull")]
    Update(commands::ServiceArgs),

    /// Restart services, then show running containers
    Restart(commands::ServiceArgs),

    /// Stop services (twice), bring them up, then show running containers
    Reboot(commands::ServiceArgs),

    /// Follow service logs, one host at a time
    Logs(commands::ServiceArgs),

    /// Show compose service status
    #[command(visible_alias = "status")]
    Ps(commands::ServiceArgs),

    /// Run an arbitrary command on every target
    Run(commands::run::RunArgs),

    /// Copy a local file to every target's home directory
    Sync(commands::sync::SyncArgs),

    /// Upload and run a bootstrap script on every target
    Bootstrap(commands::bootstrap::BootstrapArgs),

    /// List hosts from infrastructure state
    Hosts(commands::hosts::HostsArgs),

    /// Print a configuration object from the object store
    Config(commands::config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, target resolution, or command setup
    /// fails. Per-host execution failures are reported, not returned.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            user,
            fail_on_error,
            quiet,
            no_color,
            verbose,
            command,
        } = self;
        logging::init(verbose, no_color);

        let app = AppContext::new(&AppFlags {
            output: OutputFlags { no_color, quiet },
            behaviour: BehaviourFlags {
                user,
                fail_on_error,
            },
        })?;

        match command {
            Command::Start(args) => commands::compose::run(&app, Operation::Start, &args).await,
            Command::Update(args) => commands::compose::run(&app, Operation::Update, &args).await,
            Command::Restart(args) => {
                commands::compose::run(&app, Operation::Restart, &args).await
            }
            Command::Reboot(args) => commands::compose::run(&app, Operation::Reboot, &args).await,
            Command::Logs(args) => commands::compose::run(&app, Operation::Logs, &args).await,
            Command::Ps(args) => commands::compose::run(&app, Operation::Ps, &args).await,
            Command::Run(args) => commands::run::run(&app, &args).await,
            Command::Sync(args) => commands::sync::run(&app, &args).await,
            Command::Bootstrap(args) => commands::bootstrap::run(&app, &args).await,
            Command::Hosts(args) => commands::hosts::run(&app, &args).await,
            Command::Config(args) => commands::config::run(&app, &args).await,
        }
    }
}
