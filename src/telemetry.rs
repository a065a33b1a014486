use crate::error::{CoverScoutError, Result};
use crate::types::config::CoverScoutConfig;
use tracing::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Flags beat config, config beats the default. `RUST_LOG` beats all of them.
pub fn resolve_level(verbose: u8, quiet: bool, config: Option<&CoverScoutConfig>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => config
            .and_then(CoverScoutConfig::log_level)
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|source| {
            CoverScoutError::Telemetry(format!("invalid log level/filter '{level}': {source}"))
        }),
    }
}

fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .finish()
}

pub fn init(level: &str) -> Result<()> {
    subscriber(env_filter(level)?)
        .try_init()
        .map_err(|e| CoverScoutError::Telemetry(e.to_string()))
}

/// Runs `f` under a temporary subscriber at `level`. Used for work that has
/// to happen before the configured level is known, such as config loading.
pub fn scoped<T>(level: &str, f: impl FnOnce() -> T) -> Result<T> {
    let subscriber = subscriber(env_filter(level)?);
    Ok(tracing::subscriber::with_default(subscriber, f))
}
