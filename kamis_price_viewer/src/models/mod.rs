pub mod daily_sales;
pub mod period;
pub mod price_record;
