//! API availability monitor.
//!
//! Polls a health endpoint and notifies a recipient when the API goes down
//! or recovers.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────┐   observe    ┌───────────────────────────┐   notify   ┌──────────┐
//!   │  probe   │◀─────────────│          monitor          │───────────▶│  notify  │
//!   │  (HTTP)  │─────────────▶│ runner → state → message  │            │log/hook/ │
//!   └──────────┘  HealthResult└─────────────▲─────────────┘            │  smtp    │
//!                                           │                          └──────────┘
//!                                           │ shutdown
//!                               ┌───────────┴───────────┐
//!                               │ lifecycle + signals   │
//!                               └───────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use api_monitor::config::{self, ConfigOverrides, NotifierKind};
use api_monitor::lifecycle::{signals, startup, Shutdown};
use api_monitor::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "api-monitor")]
#[command(about = "Notify on confirmed outages and recoveries of an HTTP API", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Health endpoint URL.
    #[arg(short, long)]
    target: Option<String>,

    /// Notification recipient.
    #[arg(short, long)]
    recipient: Option<String>,

    /// Milliseconds between health checks.
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Notification channel.
    #[arg(long, value_enum)]
    notifier: Option<NotifierKind>,

    /// Webhook URL (with `--notifier webhook`).
    #[arg(long)]
    webhook_url: Option<String>,

    /// SMTP relay host (with `--notifier email`).
    #[arg(long)]
    smtp_host: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        target: cli.target,
        recipient: cli.recipient,
        poll_interval_ms: cli.interval_ms,
        notifier: cli.notifier,
        webhook_url: cli.webhook_url,
        smtp_host: cli.smtp_host,
    };

    let config = match config::load_config(cli.config.as_deref(), &overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("api-monitor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability);
    tracing::info!("api-monitor v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let mut monitor = match startup::build_monitor(&config) {
        Ok(monitor) => monitor,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        match signals::wait_for_signal().await {
            Ok(name) => tracing::info!(signal = name, "Shutdown requested"),
            Err(e) => tracing::error!(error = %e, "Signal handler failed, shutting down"),
        }
        let listeners = shutdown.trigger();
        tracing::debug!(listeners, "Shutdown broadcast");
    });

    monitor.run(monitor_shutdown).await;

    tracing::info!("Bye");
    ExitCode::SUCCESS
}
