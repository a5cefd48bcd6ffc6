use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::DEFAULT_LOG_FILTER, errors::Error};

/// Installs a stderr `fmt` subscriber.
///
/// Filter precedence: `override_filter` (the `--log-level` flag), then
/// `RUST_LOG`, then `configured` from the settings file. A filter that does
/// not parse is reported and replaced by [`DEFAULT_LOG_FILTER`], so error
/// events are never lost.
pub fn init_logging(override_filter: Option<&str>, configured: &str) -> Result<(), Error> {
    let (filter, rejected) = match select_filter(override_filter, configured) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    if let Some(e) = rejected {
        warn!("ignoring log filter: {e}; using {DEFAULT_LOG_FILTER}");
    }
    Ok(())
}

fn select_filter(override_filter: Option<&str>, configured: &str) -> Result<EnvFilter, Error> {
    match override_filter {
        Some(directives) => EnvFilter::try_new(directives),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(configured)),
    }
    .map_err(|e| Error::Logging(e.to_string()))
}
