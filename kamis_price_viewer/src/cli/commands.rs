use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// Print the latest KAMIS daily agricultural prices as a table.
///
/// Credentials are read from KAMIS_CERT_ID and KAMIS_CERT_KEY (a `.env`
/// file in the working directory is loaded first).
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to an optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the KAMIS endpoint (e.g. "http://www.kamis.or.kr/service/price/xml.do")
    #[arg(long)]
    pub base_url: Option<String>,

    /// Abort the request after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log filter directive (e.g. "debug"); takes precedence over RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of file/default settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.base_url {
            settings.api.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            settings.api.timeout_secs = Some(secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["kamis-price-viewer"]).unwrap();
        assert!(cli.config.is_none());

        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides_win_over_settings() {
        let cli = Cli::try_parse_from([
            "kamis-price-viewer",
            "--config",
            "viewer.toml",
            "--base-url",
            "http://localhost:3000/xml.do",
            "--timeout-secs",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("viewer.toml")));

        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.api.base_url, "http://localhost:3000/xml.do");
        assert_eq!(settings.api.timeout_secs, Some(10));
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Cli::try_parse_from(["kamis-price-viewer", "--timeout-secs", "soon"]).is_err());
    }
}
