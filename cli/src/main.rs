//! CLI entrypoint for question-bank
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use qbank_application::QuestionRepository;
use qbank_domain::{ConfigIssue, Severity};
use qbank_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, InMemoryQuestionRepository,
    JsonFileQuestionRepository, StorageBackend,
};
use qbank_presentation::{AppState, Cli, create_router};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration (or use defaults with --no-config)
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli);

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(&cli, &config.logging)?;

    info!("Starting question-bank");

    let issues = config.validate();
    report_config_issues(&issues);
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration, see errors above");
    }

    // === Dependency Injection ===
    let repository = build_repository(&config).await?;
    let app = create_router(AppState::new(repository));

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(
        "Server running on {} (storage: {})",
        listener.local_addr()?,
        config.storage.parse_backend()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Command-line flags take precedence over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(storage) = cli.storage {
        config.storage.backend = storage.as_str().to_string();
    }
    if let Some(path) = &cli.data {
        config.storage.path = path.clone();
    }
}

/// Initialize the global subscriber.
///
/// Filter priority: `RUST_LOG`, then `-v` flags, then `logging.level`.
fn init_logging(cli: &Cli, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = cli.verbosity_filter().unwrap_or(logging.level.as_str());
            EnvFilter::try_new(level)
                .with_context(|| format!("Invalid log level: {}", level))?
        }
    };

    let (file_layer, guard) = match &logging.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file has no file name: {}", path.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

fn report_config_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => error!("Config: {}", issue.message),
            Severity::Warning => warn!("Config: {}", issue.message),
        }
    }
}

async fn build_repository(config: &FileConfig) -> Result<Arc<dyn QuestionRepository>> {
    let repository: Arc<dyn QuestionRepository> = match config.storage.parse_backend() {
        StorageBackend::Memory => {
            info!("Using in-memory storage; questions are lost on exit");
            Arc::new(InMemoryQuestionRepository::new())
        }
        StorageBackend::Json => {
            let path = &config.storage.path;
            let repository = JsonFileQuestionRepository::open(path)
                .await
                .with_context(|| format!("Failed to open data file {}", path.display()))?;
            Arc::new(repository)
        }
    };
    Ok(repository)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
