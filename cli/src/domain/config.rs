//! Domain types for rd configuration.
//!
//! Pure data only: no I/O, no async, no filesystem access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::remote::RemoteAccess;

// ── Constants ────────────────────────────────────────────────────────────────

/// Remote login name used when neither the config file nor `RD_USER` set one.
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_INFRA_DIR: &str = "./infra";
pub const DEFAULT_SPACES_ENDPOINT: &str = "sfo3.digitaloceanspaces.com";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.rd/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RdConfig {
    /// Remote login name.
    pub user: String,
    /// Directory holding the terraform state describing the fleet.
    pub infra_dir: PathBuf,
    /// S3-compatible endpoint for `rd config`.
    pub spaces_endpoint: String,
    /// External programs rd delegates to.
    pub programs: Programs,
}

impl Default for RdConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            infra_dir: PathBuf::from(DEFAULT_INFRA_DIR),
            spaces_endpoint: DEFAULT_SPACES_ENDPOINT.to_string(),
            programs: Programs::default(),
        }
    }
}

/// Paths or names of the external tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Programs {
    pub ssh: String,
    pub scp: String,
    pub terraform: String,
    pub aws: String,
}

impl Default for Programs {
    fn default() -> Self {
        Self {
            ssh: "ssh".to_string(),
            scp: "scp".to_string(),
            terraform: "terraform".to_string(),
            aws: "aws".to_string(),
        }
    }
}

impl RdConfig {
    /// Apply a user override (from `--user` / `RD_USER`). Empty values are ignored.
    #[must_use]
    pub fn with_user(mut self, user: Option<String>) -> Self {
        if let Some(user) = user.filter(|u| !u.is_empty()) {
            self.user = user;
        }
        self
    }

    /// Identity and tools for reaching hosts.
    #[must_use]
    pub fn remote_access(&self) -> RemoteAccess {
        RemoteAccess {
            user: self.user.clone(),
            ssh_program: self.programs.ssh.clone(),
            scp_program: self.programs.scp.clone(),
        }
    }
}
