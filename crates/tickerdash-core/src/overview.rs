//! Dashboard views derived from a ticker list: summary counts, chart series
//! and compact number formatting.
//!
//! Everything here is pure and works on whatever slice the caller passes in,
//! so the same helpers serve the full snapshot and a filtered subset.

use std::cmp::Ordering;

use serde::Serialize;

use crate::{Symbol, Ticker};

/// Bars shown on the price chart.
pub const PRICE_CHART_SIZE: usize = 8;
/// Bars shown on the 24h change chart.
pub const CHANGE_CHART_SIZE: usize = 10;
/// Slices shown on the volume distribution chart.
pub const VOLUME_CHART_SIZE: usize = 6;

/// Headline counts for a ticker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MarketSummary {
    pub total: usize,
    pub gainers: usize,
    pub losers: usize,
    pub unchanged: usize,
}

impl MarketSummary {
    pub fn from_tickers(tickers: &[Ticker]) -> Self {
        tickers.iter().fold(
            Self {
                total: tickers.len(),
                ..Self::default()
            },
            |mut summary, ticker| {
                match ticker.change_percent().partial_cmp(&0.0) {
                    Some(Ordering::Greater) => summary.gainers += 1,
                    Some(Ordering::Less) => summary.losers += 1,
                    _ => summary.unchanged += 1,
                }
                summary
            },
        )
    }
}

/// One slice of the volume distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeSlice {
    pub symbol: Symbol,
    pub volume: f64,
    pub price: f64,
    /// Fraction of the charted total, in `0.0..=1.0`.
    pub share: f64,
}

/// Highest-priced tickers first.
pub fn top_by_price(tickers: &[Ticker], limit: usize) -> Vec<&Ticker> {
    top_by(tickers, limit, Ticker::price)
}

/// Biggest 24h gainers first, biggest losers last.
pub fn top_by_change(tickers: &[Ticker], limit: usize) -> Vec<&Ticker> {
    top_by(tickers, limit, Ticker::change_percent)
}

/// Largest-volume tickers with their share of the charted volume.
///
/// Tickers with unknown volume are left out rather than drawn as empty slices.
pub fn volume_distribution(tickers: &[Ticker], limit: usize) -> Vec<VolumeSlice> {
    let known = tickers
        .iter()
        .filter(|ticker| ticker.known_volume().is_some())
        .collect::<Vec<_>>();
    let charted = top_by_refs(known, limit, Ticker::volume);
    let total: f64 = charted.iter().map(|ticker| ticker.volume()).sum();

    charted
        .into_iter()
        .map(|ticker| VolumeSlice {
            symbol: ticker.symbol().clone(),
            volume: ticker.volume(),
            price: ticker.price(),
            share: if total > 0.0 {
                ticker.volume() / total
            } else {
                0.0
            },
        })
        .collect()
}

fn top_by<'a>(tickers: &'a [Ticker], limit: usize, key: fn(&Ticker) -> f64) -> Vec<&'a Ticker> {
    top_by_refs(tickers.iter().collect(), limit, key)
}

fn top_by_refs<'a>(
    mut tickers: Vec<&'a Ticker>,
    limit: usize,
    key: fn(&Ticker) -> f64,
) -> Vec<&'a Ticker> {
    // Ticker values are validated finite, so total_cmp matches numeric order.
    tickers.sort_by(|a, b| key(*b).total_cmp(&key(*a)));
    tickers.truncate(limit);
    tickers
}

/// Abbreviate large numbers: `1234567.0` becomes `1.23M` with two decimals.
pub fn format_compact(value: f64, decimals: usize) -> String {
    const SCALES: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

    for (scale, suffix) in SCALES {
        if value >= scale {
            return format!("{:.*}{}", decimals, value / scale, suffix);
        }
    }
    format!("{:.*}", decimals, value)
}

/// Table cell text for a price: US dollars with thousands separators and
/// between two and eight fraction digits, e.g. `$43,250.50` or `$0.485`.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.8}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut fraction = fraction.trim_end_matches('0').to_owned();
    while fraction.len() < 2 {
        fraction.push('0');
    }

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

/// Table cell text for a ticker's volume.
pub fn format_volume(ticker: &Ticker) -> String {
    match ticker.known_volume() {
        Some(volume) => format_compact(volume, 2),
        None => String::from("N/A"),
    }
}

/// Signed percentage with two decimals, e.g. `+2.45%`.
pub fn format_change(change_percent: f64) -> String {
    if change_percent >= 0.0 {
        format!("+{:.2}%", change_percent)
    } else {
        format!("{:.2}%", change_percent)
    }
}
