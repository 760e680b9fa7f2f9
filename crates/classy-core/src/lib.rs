pub mod config;
pub mod error;
pub mod session;

pub use config::{Config, SessionConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError, NetworkError, ReqwestErrorExt, StorageError};
pub use session::SessionStore;

use anyhow::Result;

/// Initialize logging.
///
/// Logs go to stderr so they never interleave with the rendered view on stdout.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Classy Weather core initialized");
    Ok(())
}
