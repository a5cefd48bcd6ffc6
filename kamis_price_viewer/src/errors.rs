use thiserror::Error;

use crate::{
    config::ConfigError,
    providers::{ProviderError, ProviderInitError},
    report::ReportError,
};

/// The unified error type for the `kamis_price_viewer` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The price provider could not be constructed.
    #[error(transparent)]
    ProviderInit(#[from] ProviderInitError),

    /// The price provider failed to deliver a listing.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The listing could not be rendered.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// An error related to configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
