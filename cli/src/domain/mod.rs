//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod error;
pub mod host;
pub mod operation;
pub mod outcome;
pub mod plan;
pub mod remote;
pub mod target;

pub use command::Command;
pub use config::RdConfig;
pub use error::{ConfigError, DirectoryError};
pub use host::{Host, HostRecord};
pub use operation::Operation;
pub use outcome::{DispatchReport, ExecOutcome, ExecStatus, OutputStream};
pub use plan::{Action, Invocation, Plan};
pub use remote::{ProcessSpec, RemoteAccess};
pub use target::FilterCriteria;
