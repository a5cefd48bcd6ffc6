use std::io::Write;

use errors::Error;
use providers::PriceProvider;
use report::table::format_price_table;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod credentials;
pub mod errors;
#[cfg(feature = "cli")]
pub mod logging;
pub mod models;
pub mod providers;
pub mod report;

/// Line printed once the provider is ready.
pub const CONNECTED_MESSAGE: &str = "KAMIS API 연결 완료";

/// Fetches the latest daily prices from `provider` and writes the report to `out`.
///
/// The count line is written before the table is rendered, so a formatting
/// failure still leaves it in the output.
pub async fn print_daily_prices<W: Write>(
    provider: &dyn PriceProvider,
    out: &mut W,
) -> Result<(), Error> {
    writeln!(out, "\n가격 정보 조회 중...")?;
    let daily_sales = provider.daily_sales_list().await?;

    writeln!(out, "\n총 {}개의 가격 정보 (단위: 원)", daily_sales.len())?;
    let table = format_price_table(&daily_sales.prices)?;
    writeln!(out, "{table}")?;
    Ok(())
}
