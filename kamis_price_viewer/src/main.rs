use std::io;

use clap::Parser;
use kamis_price_viewer::{
    CONNECTED_MESSAGE,
    cli::commands::Cli,
    config::{DEFAULT_LOG_FILTER, Settings},
    credentials::CertificationPair,
    errors::Error,
    logging::init_logging,
    print_daily_prices,
    providers::kamis_rest::provider::KamisProvider,
};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env is fine; the variables may come from the real environment.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let loaded = Settings::load(cli.config.as_deref());
    let configured_filter = loaded
        .as_ref()
        .map_or(DEFAULT_LOG_FILTER, |settings| settings.logging.level.as_str());
    if let Err(e) = init_logging(cli.log_level.as_deref(), configured_filter) {
        eprintln!("{e}");
    }

    // Every failure is logged and swallowed; the process always exits 0.
    let mut settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            error!("에러 발생: {e}");
            return;
        }
    };
    cli.apply_overrides(&mut settings);

    if let Err(e) = run(settings).await {
        error!("에러 발생: {e}");
    }
}

async fn run(settings: Settings) -> Result<(), Error> {
    let provider = KamisProvider::with_settings(CertificationPair::from_env(), &settings.api)?;
    println!("{CONNECTED_MESSAGE}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_daily_prices(&provider, &mut out).await
}
