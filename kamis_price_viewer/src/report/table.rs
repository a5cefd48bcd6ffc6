//! Fixed-column price table in the "simple" layout: a header row, a dashed
//! rule under each column, then one row per record.

use unicode_width::UnicodeWidthStr;

use crate::{
    models::{period::PricePeriod, price_record::PriceRecord},
    report::{
        ReportError,
        cells::{group_thousands, optional_price, percent_change},
    },
};

const COLUMN_COUNT: usize = 7;
const SEPARATOR: &str = "  ";

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
    /// Minimum width in terminal columns.
    min_width: usize,
}

const fn price_column(period: PricePeriod) -> Column {
    Column {
        header: period.label(),
        align: Align::Right,
        min_width: 6,
    }
}

const COLUMNS: [Column; COLUMN_COUNT] = [
    Column {
        header: "상품명",
        align: Align::Left,
        min_width: 12,
    },
    Column {
        header: "단위",
        align: Align::Left,
        min_width: 6,
    },
    price_column(PricePeriod::CurrentDay),
    price_column(PricePeriod::OneDayPrior),
    price_column(PricePeriod::OneMonthPrior),
    price_column(PricePeriod::OneYearPrior),
    Column {
        header: "변동률",
        align: Align::Right,
        min_width: 5,
    },
];

/// Header labels, in column order.
pub const HEADERS: [&str; COLUMN_COUNT] = [
    COLUMNS[0].header,
    COLUMNS[1].header,
    COLUMNS[2].header,
    COLUMNS[3].header,
    COLUMNS[4].header,
    COLUMNS[5].header,
    COLUMNS[6].header,
];

type Row = [String; COLUMN_COUNT];

/// Renders `records` as a table, one row per record in input order.
///
/// Every record must carry all four [`PricePeriod`] keys, and numeric
/// current-day and one-day-prior prices. The first violation aborts the
/// whole table.
pub fn format_price_table(records: &[PriceRecord]) -> Result<String, ReportError> {
    let rows = records
        .iter()
        .map(render_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(layout(&rows))
}

fn render_row(record: &PriceRecord) -> Result<Row, ReportError> {
    Ok([
        record.product_name.clone(),
        record.unit.clone(),
        required_price(record, PricePeriod::CurrentDay)?,
        required_price(record, PricePeriod::OneDayPrior)?,
        optional_price(lookup(record, PricePeriod::OneMonthPrior)?),
        optional_price(lookup(record, PricePeriod::OneYearPrior)?),
        percent_change(record.direction_value),
    ])
}

fn lookup(record: &PriceRecord, period: PricePeriod) -> Result<Option<i64>, ReportError> {
    record
        .price(period)
        .ok_or_else(|| ReportError::MissingPeriod {
            product: record.product_name.clone(),
            period,
        })
}

fn required_price(record: &PriceRecord, period: PricePeriod) -> Result<String, ReportError> {
    let price = lookup(record, period)?.ok_or_else(|| ReportError::MissingPrice {
        product: record.product_name.clone(),
        period,
    })?;
    Ok(group_thousands(price))
}

fn layout(rows: &[Row]) -> String {
    let widths: [usize; COLUMN_COUNT] = std::array::from_fn(|i| {
        rows.iter()
            .map(|row| row[i].width())
            .chain([COLUMNS[i].min_width, COLUMNS[i].header.width()])
            .max()
            .unwrap_or(COLUMNS[i].min_width)
    });

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_line(HEADERS.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(SEPARATOR),
    );
    for row in rows {
        lines.push(render_line(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize; COLUMN_COUNT]) -> String {
    cells
        .zip(COLUMNS.iter().zip(widths))
        .map(|(cell, (column, width))| pad(cell, column.align, *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn pad(cell: &str, align: Align, width: usize) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}
