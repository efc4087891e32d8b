//! # Display Normalization
//!
//! Formatting helpers applied by the facade before data reaches a page:
//! base-unit balances to display units, locale grouping for large counters,
//! timestamp rendering, and the rows-per-page clamp.

use chrono::{TimeZone, Utc};
use explorer_types::BlockStats;
use primitive_types::U256;

/// Base units per display coin (wei-like, 10^18).
const WEI_PER_COIN: u128 = 1_000_000_000_000_000_000;

/// Bounds for the blocks-per-page selector.
pub const MIN_ROWS_PER_PAGE: u32 = 10;
/// Upper bound for the blocks-per-page selector.
pub const MAX_ROWS_PER_PAGE: u32 = 100;

/// Convert a base-unit (wei-like) decimal string to display units.
///
/// `"1234500000000000000"` renders as `"1.2345"`; whole-coin values render
/// without a fraction part. Unparseable input renders as `"0"`.
pub fn from_wei(base_units: &str) -> String {
    let value = match U256::from_dec_str(base_units.trim()) {
        Ok(v) => v,
        Err(_) => return "0".to_string(),
    };
    let divisor = U256::from(WEI_PER_COIN);
    let whole = value / divisor;
    let remainder = (value % divisor).as_u128();

    if remainder == 0 {
        return whole.to_string();
    }

    let fraction = format!("{remainder:018}");
    let fraction = fraction.trim_end_matches('0');
    format!("{whole}.{fraction}")
}

/// Locale-style thousands grouping of an unsigned counter.
pub fn format_number(n: u64) -> String {
    group_digits(&n.to_string())
}

/// Locale-style thousands grouping of the integer part of a decimal string.
/// Non-numeric input is passed through untouched.
pub fn format_number_string(s: &str) -> String {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return s.to_string();
    }
    group_digits(s)
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Shorten a long identifier for display, keeping both ends.
pub fn truncate_middle(s: &str) -> String {
    const KEEP: usize = 8;
    if s.chars().count() <= KEEP * 2 + 3 {
        return s.to_string();
    }
    let head: String = s.chars().take(KEEP).collect();
    let tail: String = s.chars().rev().take(KEEP).collect::<Vec<_>>().into_iter().rev().collect();
    format!("{head}...{tail}")
}

/// Success rate of transactions as a formatted percentage, `N/A` when no
/// transactions were executed.
pub fn tx_success_rate(stats: &BlockStats) -> String {
    if stats.total_txs_number == 0 {
        return "N/A".to_string();
    }
    let rate = stats.successful_txs_number as f64 / stats.total_txs_number as f64;
    format!("{:.2}%", rate * 100.0)
}

/// Clamp the blocks-per-page selector to its accepted range.
/// Absent or zero input falls back to the minimum.
pub fn clamp_rows_per_page(rows: Option<u32>) -> u32 {
    let requested = match rows {
        Some(0) | None => MIN_ROWS_PER_PAGE,
        Some(r) => r,
    };
    requested.clamp(MIN_ROWS_PER_PAGE, MAX_ROWS_PER_PAGE)
}

/// A millisecond UNIX timestamp with its page renderings.
#[derive(Debug, Clone, Copy)]
pub struct FormattedDate(pub u64);

impl FormattedDate {
    /// Compact rendering for table rows.
    pub fn preview(&self) -> String {
        self.render("%d %b %Y, %H:%M")
    }

    /// Full rendering for entity pages.
    pub fn full(&self) -> String {
        self.render("%d %b %Y, %H:%M:%S UTC")
    }

    fn render(&self, fmt: &str) -> String {
        match Utc.timestamp_millis_opt(self.0 as i64).single() {
            Some(dt) => dt.format(fmt).to_string(),
            None => "N/A".to_string(),
        }
    }
}
