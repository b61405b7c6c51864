//! Application entrypoint.
//!
//! # Sequence
//! ```text
//! parse CLI → load config → init logging → App::start → (wait) → App::stop
//! ```
//!
//! Exit status is 0 on success and 1 when configuration, logging or
//! startup fails. Teardown runs before the failure status is returned.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use app_lifecycle::config::validation::validate_config;
use app_lifecycle::config::{self, AppConfig, ConfigError, ObservabilityConfig};
use app_lifecycle::lifecycle::{self, signals, App};
use app_lifecycle::observability::{self, ErrorChain};
use app_lifecycle::AppError;

#[derive(Parser)]
#[command(name = "app")]
#[command(about = "Start the application, then stop it", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Cli {
    fn load_config(&self) -> Result<AppConfig, AppError> {
        let mut config = config::load_or_default(self.config.as_deref())?;
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
            validate_config(&config).map_err(ConfigError::Validation)?;
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            let _ = observability::init_logging(&ObservabilityConfig::default());
            observability::report(&e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = observability::init_logging(&config.observability) {
        let _ = observability::init_logging(&ObservabilityConfig::default());
        observability::report(&AppError::from(e));
        return ExitCode::FAILURE;
    }

    let app = App::new(config);

    tracing::info!(
        name = %app.config().name,
        instance = %app.instance_id(),
        wait_for_signal = app.config().lifecycle.wait_for_signal,
        "Configuration loaded"
    );

    if let Err(e) = lifecycle::run(app, signals::shutdown_signal()).await {
        tracing::error!("Failed to start the application: {}", ErrorChain(&e));
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
