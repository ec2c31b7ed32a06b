//! `ObjectStore` port backed by the `aws` CLI against an S3-compatible endpoint.
//!
//! Credentials are picked up by the CLI itself from `AWS_ACCESS_KEY_ID` and
//! `AWS_SECRET_ACCESS_KEY`.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ObjectStore};

pub struct AwsCliObjectStore<'a, R> {
    runner: &'a R,
    program: String,
    endpoint: String,
}

impl<'a, R: CommandRunner> AwsCliObjectStore<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R, program: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
            endpoint: endpoint.into(),
        }
    }

    fn endpoint_url(&self) -> String {
        if self.endpoint.contains("://") {
            self.endpoint.clone()
        } else {
            format!("https://{}", self.endpoint)
        }
    }
}

impl<R: CommandRunner> ObjectStore for AwsCliObjectStore<'_, R> {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let source = format!("s3://{bucket}/{key}");
        let endpoint = self.endpoint_url();
        let output = self
            .runner
            .run(
                &self.program,
                &["s3", "cp", &source, "-", "--endpoint-url", &endpoint],
            )
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{} s3 cp failed: {}", self.program, stderr.trim());
        }
        Ok(output.stdout)
    }
}
