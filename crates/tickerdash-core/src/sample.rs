//! Fixed sample dataset for demos and offline development.
//!
//! These records are never produced by [`crate::TickerIngestion`]. They reach
//! a caller only through [`crate::Snapshot::sample`], which tags them
//! [`crate::SnapshotOrigin::Sample`].

use crate::{Symbol, Ticker};

// symbol, price, change %, volume, market cap
const SAMPLE_ROWS: [(&str, f64, f64, f64, f64); 10] = [
    ("BTCUSDT", 43250.50, 2.45, 1_234_567.0, 850_000_000_000.0),
    ("ETHUSDT", 2650.75, -1.23, 987_654.0, 320_000_000_000.0),
    ("ADAUSDT", 0.485, 5.67, 2_345_678.0, 17_000_000_000.0),
    ("SOLUSDT", 98.45, 3.21, 456_789.0, 42_000_000_000.0),
    ("DOTUSDT", 7.89, -2.15, 345_678.0, 9_000_000_000.0),
    ("MATICUSDT", 0.95, 4.32, 567_890.0, 8_500_000_000.0),
    ("AVAXUSDT", 38.25, 1.87, 234_567.0, 14_000_000_000.0),
    ("LINKUSDT", 14.67, -0.95, 123_456.0, 7_500_000_000.0),
    ("UNIUSDT", 6.45, 2.78, 345_678.0, 4_800_000_000.0),
    ("ATOMUSDT", 12.34, -1.45, 234_567.0, 3_600_000_000.0),
];

/// The sample tickers in display order.
pub fn sample_tickers() -> Vec<Ticker> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|&(symbol, price, change_percent, volume, market_cap)| {
            let symbol = Symbol::parse(symbol).ok()?;
            Ticker::new(symbol, price, change_percent, volume)
                .and_then(|ticker| ticker.with_market_cap(market_cap))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_row_is_valid() {
        let tickers = sample_tickers();
        assert_eq!(tickers.len(), SAMPLE_ROWS.len());
        assert!(tickers.iter().all(|ticker| ticker.market_cap().is_some()));
    }

    #[test]
    fn sample_symbols_are_unique() {
        let tickers = sample_tickers();
        let mut symbols: Vec<_> = tickers.iter().map(|t| t.symbol().as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), tickers.len());
    }
}
