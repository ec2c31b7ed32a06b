//! Fake fleet fixture: shell-script stand-ins for terraform, ssh, scp and aws.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const STATE: &str = r#"{"values":{"root_module":{"resources":[
{"values":{"name":"web-1","ipv4_address":"192.0.2.1","ipv4_address_private":"10.0.0.1"}},
{"values":{"name":"web-2","ipv4_address":"192.0.2.2","ipv4_address_private":"10.0.0.2"}},
{"values":{"name":"db-1","ipv4_address":"192.0.2.3","ipv4_address_private":"10.0.0.3"}}
]}}}"#;

/// A temporary directory with fake tools and an `rd` config pointing at them.
pub struct FakeFleet {
    pub dir: TempDir,
}

impl FakeFleet {
    /// Fleet whose ssh succeeds everywhere.
    pub fn new() -> Self {
        Self::with_ssh("exit 0")
    }

    /// Fleet whose fake ssh runs `tail` after echoing its arguments.
    pub fn with_ssh(tail: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        let log = log_path(root);
        let state = root.join("state.json");
        std::fs::write(&state, STATE).expect("state");

        script(
            root,
            "terraform",
            &format!("echo \"$*\" >> {log}\ncat {}", state.display()),
        );
        script(
            root,
            "ssh",
            &format!("echo \"ssh $*\" >> {log}\necho \"ran $*\"\n{tail}"),
        );
        script(root, "scp", &format!("echo \"scp $*\" >> {log}"));
        script(
            root,
            "aws",
            &format!("echo \"aws $*\" >> {log}\necho 'KEY=value'"),
        );

        let bin = root.display();
        let config = format!(
            "infra_dir: {infra}\n\
             programs:\n  \
             terraform: {bin}/terraform\n  \
             ssh: {bin}/ssh\n  \
             scp: {bin}/scp\n  \
             aws: {bin}/aws\n",
            infra = root.join("infra").display(),
        );
        std::fs::write(root.join("config.yaml"), config).expect("config");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `rd` preconfigured against this fleet.
    pub fn rd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rd"));
        cmd.env("NO_COLOR", "1")
            .env("RD_CONFIG", self.path().join("config.yaml"))
            .env_remove("RD_USER")
            .env_remove("RD_FAIL_ON_ERROR")
            .env_remove("RD_LOG");
        cmd
    }

    /// Every recorded tool invocation, in order.
    pub fn log(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Recorded ssh and scp invocations only.
    pub fn remote_calls(&self) -> Vec<String> {
        self.log()
            .into_iter()
            .filter(|l| l.starts_with("ssh ") || l.starts_with("scp "))
            .collect()
    }
}

fn log_path(root: &Path) -> String {
    root.join("calls.log").display().to_string()
}

#[cfg(unix)]
fn script(root: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = root.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

#[cfg(not(unix))]
fn script(root: &Path, name: &str, body: &str) -> PathBuf {
    let path = root.join(name);
    std::fs::write(&path, body).expect("write script");
    path
}
