//! Command implementations

pub mod bootstrap;
pub mod compose;
pub mod config;
pub mod hosts;
pub mod run;
pub mod sync;

use clap::Args;

use crate::domain::FilterCriteria;

/// Host filter flags shared by every fleet command.
///
/// A host is selected when it matches any given filter; with no filter, all
/// hosts are selected.
#[derive(Args, Debug, Default, Clone)]
pub struct TargetArgs {
    /// Filter hosts by name prefix
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Filter hosts by public ip
    #[arg(short = 'i', long)]
    pub ip: Option<String>,

    /// Filter hosts by private key (matched against the host name)
    #[arg(short = 'p', long)]
    pub private: Option<String>,
}

impl TargetArgs {
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.name.clone(), self.ip.clone(), self.private.clone())
    }
}

/// Arguments for the docker compose operations.
#[derive(Args, Debug)]
pub struct ServiceArgs {
    #[command(flatten)]
    pub targets: TargetArgs,

    /// Limit the operation to one compose service
    pub service: Option<String>,
}
