//! Application service: fetch the shared configuration blob.

use anyhow::{Context, Result};

use crate::application::ports::ObjectStore;
use crate::domain::ConfigError;

/// Fetch `bucket/key` from the object store.
///
/// # Errors
///
/// Returns [`ConfigError::MissingObject`] when either name is empty, or the
/// store's error when the fetch fails.
pub async fn fetch_config(store: &impl ObjectStore, bucket: &str, key: &str) -> Result<Vec<u8>> {
    if bucket.is_empty() || key.is_empty() {
        return Err(ConfigError::MissingObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
        .into());
    }
    store
        .fetch(bucket, key)
        .await
        .with_context(|| format!("cannot fetch {bucket}/{key}"))
}
