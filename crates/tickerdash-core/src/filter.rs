use crate::Ticker;

/// Keep tickers whose symbol contains `query`, ignoring case.
///
/// A blank query returns every ticker in its original order.
pub fn filter_tickers(tickers: &[Ticker], query: &str) -> Vec<Ticker> {
    if query.trim().is_empty() {
        return tickers.to_vec();
    }

    let needle = query.to_lowercase();
    tickers
        .iter()
        .filter(|ticker| ticker.symbol().contains_ignore_case(&needle))
        .cloned()
        .collect()
}
