//! # hubreport — hub sensor report
//!
//! Composition root that wires the adapters together and either runs one
//! poll or serves the report over HTTP.
//!
//! ## Responsibilities
//! - Parse the command line and configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the hub client and report store (adapters)
//! - Construct the poll service, injecting adapters via port traits
//! - `run`: poll once, write the report, exit 1 if the write fails
//! - `serve`: bind the axum router and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hubreport_adapter_http_axum::router;
use hubreport_adapter_http_axum::state::AppState;
use hubreport_adapter_http_reqwest::HubClient;
use hubreport_adapter_report_file::AtomicFileStore;
use hubreport_app::services::poll_service::PollService;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "hubreport",
    about = "Poll home-automation hub sensors and write a flat text report",
    version
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = config::DEFAULT_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Default, Subcommand)]
enum Command {
    /// Poll every sensor once and write the report (default).
    #[default]
    Run,
    /// Serve the report over HTTP and poll on `GET /run`.
    Serve,
}

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("hubreport: {}", error_chain(&err));
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command.unwrap_or_default() {
        Command::Run => run_once(&config).await,
        Command::Serve => serve(&config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %error_chain(err.as_ref()), "hubreport failed");
            ExitCode::FAILURE
        }
    }
}

fn build_service(config: &Config) -> Result<PollService<HubClient, AtomicFileStore>, BoxError> {
    if config.hub.auth_token.is_empty() {
        tracing::warn!("no auth token configured, requests are sent without Authorization header");
    }
    let endpoints = config.endpoints()?;
    let client = HubClient::new(&config.hub)?;
    let store = AtomicFileStore::from_config(&config.report);
    Ok(PollService::new(client, store, endpoints))
}

async fn run_once(config: &Config) -> Result<(), BoxError> {
    let service = build_service(config)?;
    service.run().await?;
    Ok(())
}

async fn serve(config: &Config) -> Result<(), BoxError> {
    let service = build_service(config)?;
    let sensors: Vec<&str> = service
        .endpoints()
        .iter()
        .map(|endpoint| endpoint.label.as_str())
        .collect();
    tracing::info!(?sensors, run_timeout = ?config.run_timeout(), "serving sensor report");
    let state = AppState::new(service, config.run_timeout());
    let app = router::build(state, config.server.static_dir.clone());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "hubreport listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
