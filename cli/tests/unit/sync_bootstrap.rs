//! File sync and bootstrap services.

#![allow(clippy::expect_used)]

use rd_cli::application::services::bootstrap::{bootstrap, bootstrap_plan};
use rd_cli::application::services::dispatch::Dispatcher;
use rd_cli::application::services::sync::sync_files;

use crate::helpers::{RecordingRunner, RecordingSink, h1, h2, remote};

#[tokio::test]
async fn sync_copies_to_each_host_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("docker-compose.yml");
    std::fs::write(&file, "services: {}\n").expect("write");

    let runner = RecordingRunner::new();
    let sink = RecordingSink::default();
    let remote = remote();
    let dispatcher = Dispatcher::new(&runner, &sink, &remote);

    let report = sync_files(&dispatcher, &[h1(), h2()], &file, false)
        .await
        .expect("sync");

    let src = file.display().to_string();
    assert_eq!(
        runner.calls(),
        [
            format!("scp {src} root@192.0.2.1:."),
            format!("scp {src} root@192.0.2.2:."),
        ]
    );
    assert_eq!(report.len(), 2);
}

#[tokio::test]
async fn recursive_sync_passes_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let runner = RecordingRunner::new();
    let sink = RecordingSink::default();
    let remote = remote();
    let dispatcher = Dispatcher::new(&runner, &sink, &remote);

    sync_files(&dispatcher, &[h1()], dir.path(), true)
        .await
        .expect("sync");

    let calls = runner.calls();
    assert!(calls[0].starts_with("scp -r "), "{calls:?}");
}

#[tokio::test]
async fn sync_of_missing_file_fails_before_any_copy() {
    let runner = RecordingRunner::new();
    let sink = RecordingSink::default();
    let remote = remote();
    let dispatcher = Dispatcher::new(&runner, &sink, &remote);

    let err = sync_files(
        &dispatcher,
        &[h1()],
        std::path::Path::new("/nonexistent/compose.yml"),
        false,
    )
    .await
    .expect_err("should fail");

    assert!(err.to_string().contains("not found"));
    assert!(runner.calls().is_empty());
}

#[test]
fn bootstrap_plan_uploads_then_chmods_then_runs() {
    let plan = bootstrap_plan(&[h1(), h2()], std::path::Path::new("/tmp/x/setup.sh"))
        .expect("plan");
    let shape: Vec<String> = plan
        .iter()
        .map(|inv| format!("{} {}", inv.host.name, inv.action))
        .collect();
    assert_eq!(
        shape,
        [
            "H1 copy /tmp/x/setup.sh",
            "H2 copy /tmp/x/setup.sh",
            "H1 chmod +x setup.sh",
            "H2 chmod +x setup.sh",
            "H1 ./setup.sh",
            "H2 ./setup.sh",
        ]
    );
}

#[tokio::test]
async fn bootstrap_continues_after_a_failed_upload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = dir.path().join("bootstrap.sh");
    std::fs::write(&script, "#!/bin/sh\n").expect("write");

    let runner = RecordingRunner::new().failing("192.0.2.1");
    let sink = RecordingSink::default();
    let remote = remote();
    let dispatcher = Dispatcher::new(&runner, &sink, &remote);

    let report = bootstrap(&dispatcher, &[h1(), h2()], &script)
        .await
        .expect("bootstrap");

    assert_eq!(runner.calls().len(), 6);
    assert_eq!(report.failures().count(), 3);
    assert!(report.failures().all(|o| o.host.name == "H1"));
}

#[tokio::test]
async fn bootstrap_requires_existing_script() {
    let runner = RecordingRunner::new();
    let sink = RecordingSink::default();
    let remote = remote();
    let dispatcher = Dispatcher::new(&runner, &sink, &remote);

    let result = bootstrap(
        &dispatcher,
        &[h1()],
        std::path::Path::new("/nonexistent/bootstrap.sh"),
    )
    .await;

    assert!(result.is_err());
    assert!(runner.calls().is_empty());
}
