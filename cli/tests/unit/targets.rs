//! Target resolution service.

#![allow(clippy::expect_used)]

use rd_cli::application::services::targets::resolve_targets;
use rd_cli::domain::{FilterCriteria, Host};

use crate::helpers::{BrokenDirectory, StaticDirectory};

fn directory() -> StaticDirectory {
    StaticDirectory(vec![
        Host::new("A", "ip1", "10.0.0.1"),
        Host::new("B", "ip2", "10.0.0.2"),
    ])
}

#[tokio::test]
async fn no_filters_return_whole_directory() {
    let targets = resolve_targets(&directory(), &FilterCriteria::default())
        .await
        .expect("resolve");
    let names: Vec<_> = targets.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[tokio::test]
async fn public_address_filter_selects_single_host() {
    let criteria = FilterCriteria::new(None, Some("ip2".into()), None);
    let targets = resolve_targets(&directory(), &criteria)
        .await
        .expect("resolve");
    assert_eq!(targets, vec![Host::new("B", "ip2", "10.0.0.2")]);
}

#[tokio::test]
async fn unmatched_filter_is_not_an_error() {
    let criteria = FilterCriteria::new(Some("zzz".into()), None, None);
    let targets = resolve_targets(&directory(), &criteria)
        .await
        .expect("resolve");
    assert!(targets.is_empty());
}

#[tokio::test]
async fn directory_failure_is_fatal_with_cause() {
    let err = resolve_targets(&BrokenDirectory, &FilterCriteria::default())
        .await
        .expect_err("should fail");
    let msg = format!("{err:#}");
    assert!(msg.contains("cannot read host directory"), "{msg}");
    assert!(msg.contains("state lock held"), "{msg}");
}
