//! Pure presentation formatters for rendering layers.
//!
//! Stateless and deterministic given their inputs; invalid numeric input
//! falls back to a default instead of erroring.

use chrono::{DateTime, Utc};

/// `Sep 12, 2025` style date.
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Coarse "how long ago" label used on article cards.
///
/// Not pure (reads the clock); [`time_since_from`] is the deterministic core.
pub fn time_since(ts: DateTime<Utc>) -> String {
    time_since_from(ts, Utc::now())
}

/// `< 1h` → "Less than an hour ago", `< 24h` → hours, `< 7d` → days, older
/// articles fall back to [`format_date`].
pub fn time_since_from(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(ts);
    let hours = elapsed.num_hours();

    if hours < 1 {
        "Less than an hour ago".to_string()
    } else if hours < 24 {
        format!("{hours} hours ago")
    } else if elapsed.num_days() < 7 {
        format!("{} days ago", elapsed.num_days())
    } else {
        format_date(ts)
    }
}

/// `$1,234.56` — two decimals, thousands-grouped.
pub fn format_price(n: f64) -> String {
    if !n.is_finite() {
        return "$0.00".to_string();
    }

    let cents = (n.abs() * 100.0).round() as u64;
    let sign = if n < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Magnitude-abbreviated count: `1.5K`, `2.5M`, `1.0B`, `1.0T`, one decimal
/// place. Values below 1000 are left unabbreviated; zero or non-numeric input
/// renders as `"0"`.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() || n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    let sign = if n < 0.0 { "-" } else { "" };

    if abs >= 1e12 {
        format!("{sign}{:.1}T", abs / 1e12)
    } else if abs >= 1e9 {
        format!("{sign}{:.1}B", abs / 1e9)
    } else if abs >= 1e6 {
        format!("{sign}{:.1}M", abs / 1e6)
    } else if abs >= 1e3 {
        format!("{sign}{:.1}K", abs / 1e3)
    } else {
        n.to_string()
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.insert(0, ',');
        }
        out.insert(0, c);
    }
    out
}
