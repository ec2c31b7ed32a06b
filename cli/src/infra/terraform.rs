//! Terraform-backed implementation of the `HostDirectory` port.
//!
//! Hosts are read from `terraform show -json` in the infrastructure directory.
//! Every resource carrying both `ipv4_address` and `ipv4_address_private`
//! becomes a host.

use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::application::ports::{CommandRunner, HostDirectory};
use crate::domain::host::{self, Host, HostRecord};
use crate::domain::DirectoryError;

#[derive(Deserialize)]
struct ShowOutput {
    #[serde(default)]
    values: Option<StateValues>,
}

#[derive(Deserialize)]
struct StateValues {
    #[serde(default)]
    root_module: RootModule,
}

#[derive(Deserialize, Default)]
struct RootModule {
    #[serde(default)]
    resources: Vec<Resource>,
}

#[derive(Deserialize)]
struct Resource {
    #[serde(default)]
    values: Option<Map<String, Value>>,
}

fn string_field(values: &Map<String, Value>, key: &str) -> Option<String> {
    values.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Parse `terraform show -json` output into raw host records, in state order.
/// Resources whose `values` is null are skipped.
///
/// # Errors
///
/// Returns [`DirectoryError::Malformed`] if the document is not valid JSON of
/// the expected shape.
pub fn parse_state(json: &[u8]) -> Result<Vec<HostRecord>, DirectoryError> {
    let show: ShowOutput =
        serde_json::from_slice(json).map_err(|e| DirectoryError::Malformed(e.to_string()))?;
    let resources = show
        .values
        .map(|v| v.root_module.resources)
        .unwrap_or_default();
    Ok(resources
        .into_iter()
        .filter_map(|r| r.values)
        .map(|values| HostRecord {
            name: string_field(&values, "name"),
            public_address: string_field(&values, "ipv4_address"),
            private_address: string_field(&values, "ipv4_address_private"),
        })
        .collect())
}

/// Host directory that shells out to terraform.
pub struct TerraformDirectory<'a, R> {
    runner: &'a R,
    program: String,
    infra_dir: PathBuf,
}

impl<'a, R: CommandRunner> TerraformDirectory<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R, program: impl Into<String>, infra_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            program: program.into(),
            infra_dir: infra_dir.into(),
        }
    }
}

impl<R: CommandRunner> HostDirectory for TerraformDirectory<'_, R> {
    async fn hosts(&self) -> Result<Vec<Host>> {
        let chdir = format!("-chdir={}", self.infra_dir.display());
        let output = self
            .runner
            .run(&self.program, &[&chdir, "show", "-json"])
            .await?;

        if !output.status.success() {
            return Err(DirectoryError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(host::normalize(parse_state(&output.stdout)?))
    }
}
