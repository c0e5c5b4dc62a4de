use std::io::{self, Write};
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use air_quality::config::client_config_from_env;
use air_quality::gios::GiosClient;
use air_quality::report::build_report;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match client_config_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match GiosClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: failed to create API client: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(base_url = client.base_url(), "Fetching data from API, please wait");

    let report = match build_report(&client).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{report}").and_then(|()| stdout.flush()) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return ExitCode::SUCCESS;
        }
        eprintln!("Error: failed to write report: {e}");
        return ExitCode::FAILURE;
    }

    if !report.failed_stations().is_empty() {
        info!(
            failed = ?report.failed_stations(),
            "some stations are listed without installations"
        );
    }

    ExitCode::SUCCESS
}
