//! Tests that run the compiled binary against an in-process mock API.

use std::process::{Command, Output, Stdio};
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::sync::Notify;

const BIN: &str = env!("CARGO_BIN_EXE_air-quality");

/// Serve `router` on an ephemeral port and return the base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/station")
}

fn command(base_url: &str) -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env("AIR_QUALITY_BASE_URL", base_url)
        .env("AIR_QUALITY_TIMEOUT_SECS", "5")
        .env("RUST_LOG", "warn")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn prints_report_and_exits_zero() {
    let router = Router::new()
        .route(
            "/station/findAll",
            get(|| async { r#"[{ "id": 3, "stationName": "X" }, { "id": 1, "stationName": "Y" }]"# }),
        )
        .route("/station/sensors/:id", get(|| async { "[]" }));
    let base = serve(router).await;

    let output = run(command(&base)).await;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Station #1 (Y):\nNo installations found\n\nStation #3 (X):\nNo installations found\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_listing_reported_once_on_stderr() {
    let router = Router::new().route(
        "/station/findAll",
        get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let base = serve(router).await;

    let output = run(command(&base)).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("failed to list stations").count(),
        1,
        "stderr was: {stderr}"
    );
    assert!(stderr.contains("too many requests (HTTP 429)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_base_url_is_a_config_error() {
    let output = run(command("not a url")).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AIR_QUALITY_BASE_URL must be an absolute http(s) URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_stdout_exits_cleanly() {
    // The listing is held back until the reader end of stdout is gone
    let release = Arc::new(Notify::new());
    let gate = release.clone();
    let router = Router::new()
        .route(
            "/station/findAll",
            get(move || {
                let gate = gate.clone();
                async move {
                    gate.notified().await;
                    r#"[{ "id": 1, "stationName": "Y" }]"#
                }
            }),
        )
        .route("/station/sensors/:id", get(|| async { "[]" }));
    let base = serve(router).await;

    let mut child = command(&base).spawn().unwrap();
    drop(child.stdout.take());
    release.notify_one();

    let output = tokio::task::spawn_blocking(move || child.wait_with_output().unwrap())
        .await
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr was: {stderr}");
    assert!(!stderr.contains("panicked"));
}
