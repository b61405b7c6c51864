//! Start/stop sequencing through `run`.

use std::time::Duration;

use app_lifecycle::{run, App, AppConfig, AppError};
use tokio::sync::oneshot;

mod common;

use common::{failing, healthy, Journal};

#[tokio::test]
async fn test_run_starts_then_stops() {
    let journal = Journal::default();
    let app = App::default()
        .with_component(healthy(&journal, "db"))
        .with_component(healthy(&journal, "cache"));

    run(app, std::future::pending()).await.unwrap();

    assert_eq!(
        journal.events(),
        ["start db", "start cache", "stop cache", "stop db"]
    );
}

#[tokio::test]
async fn test_run_without_wait_ignores_shutdown_future() {
    let journal = Journal::default();
    let app = App::default().with_component(healthy(&journal, "db"));

    // A pending shutdown future must not block when waiting is disabled.
    tokio::time::timeout(Duration::from_secs(5), run(app, std::future::pending()))
        .await
        .expect("run should not wait")
        .unwrap();
}

#[tokio::test]
async fn test_run_failure_releases_and_returns_error() {
    let journal = Journal::default();
    let app = App::default()
        .with_component(healthy(&journal, "db"))
        .with_component(failing(&journal, "queue", "boom"))
        .with_component(healthy(&journal, "http"));

    let err = run(app, std::future::pending()).await.unwrap_err();

    assert!(matches!(&err, AppError::Component { name, .. } if name == "queue"));
    assert_eq!(journal.events(), ["start db", "start queue", "stop db"]);
}

#[tokio::test]
async fn test_run_waits_for_shutdown_signal() {
    let journal = Journal::default();
    let mut config = AppConfig::default();
    config.lifecycle.wait_for_signal = true;
    let app = App::new(config).with_component(healthy(&journal, "db"));

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        run(app, async {
            let _ = rx.await;
        })
        .await
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(journal.events(), ["start db"]);

    tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
    assert_eq!(journal.events(), ["start db", "stop db"]);
}
