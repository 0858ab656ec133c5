//! Display formatting for amounts and timestamps.
//!
//! Amounts are whole currency units (UZS). Grouping and month names follow
//! the `uz-UZ` locale.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;

/// Suffix shown after full-format amounts.
pub const CURRENCY: &str = "UZS";

/// `uz-UZ` groups thousands with a no-break space.
pub const GROUP_SEPARATOR: char = '\u{a0}';

const MONTHS_SHORT: [&str; 12] = [
    "yan", "fev", "mar", "apr", "may", "iyn", "iyl", "avg", "sen", "okt", "noy", "dek",
];

/// Abbreviated form with `K`/`M` suffixes, one decimal place.
///
/// ```rust
/// use moliya_dashboard::format::format_compact;
///
/// assert_eq!(format_compact(999), "999");
/// assert_eq!(format_compact(1_250), "1.3K");
/// assert_eq!(format_compact(2_000_000), "2.0M");
/// ```
#[must_use]
pub fn format_compact(amount: i64) -> String {
    if amount >= 1_000_000 {
        return format!("{}M", one_decimal(amount, 1_000_000));
    }
    if amount >= 1_000 {
        return format!("{}K", one_decimal(amount, 1_000));
    }
    amount.to_string()
}

/// `amount / unit` rounded half-up to one decimal place, in integer math.
fn one_decimal(amount: i64, unit: i64) -> String {
    let step = unit / 10;
    let tenths = amount.saturating_add(step / 2) / step;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Like [`format_compact`], treating a missing amount as 0.
#[must_use]
pub fn format_compact_opt(amount: Option<i64>) -> String {
    format_compact(amount.unwrap_or(0))
}

/// Locale-grouped integer, e.g. `1 500 000`. A missing amount renders as `0`.
#[must_use]
pub fn format_full(amount: Option<i64>) -> String {
    let amount = amount.unwrap_or(0);
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Full amount followed by the currency suffix.
#[must_use]
pub fn format_full_currency(amount: Option<i64>) -> String {
    format!("{} {CURRENCY}", format_full(amount))
}

/// `"{month} {day}, {HH}:{MM}"` in the given timezone.
#[must_use]
pub fn format_date(timestamp: &DateTime<Utc>, tz: Tz) -> String {
    let local = timestamp.with_timezone(&tz);
    let month = MONTHS_SHORT[local.month0() as usize];
    format!(
        "{month} {}, {:02}:{:02}",
        local.day(),
        local.hour(),
        local.minute()
    )
}

/// Width of `value` relative to `max`, rounded, in `0..=100`.
///
/// A non-positive `max` yields 0.
#[must_use]
pub fn percent_of(value: i64, max: i64) -> u16 {
    if max <= 0 {
        return 0;
    }
    ((value.max(0) as f64 / max as f64) * 100.0).round().min(100.0) as u16
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn compact_below_thousand_is_plain() {
        for amount in [0, 1, 42, 999] {
            assert_eq!(format_compact(amount), amount.to_string());
        }
    }

    #[test]
    fn compact_thousands_use_k() {
        assert_eq!(format_compact(1_000), "1.0K");
        assert_eq!(format_compact(1_049), "1.0K");
        assert_eq!(format_compact(45_600), "45.6K");
        assert_eq!(format_compact(500_000), "500.0K");
        assert_eq!(format_compact(999_000), "999.0K");
        assert_eq!(format_compact(999_999), "1000.0K");
    }

    #[test]
    fn compact_millions_use_m() {
        assert_eq!(format_compact(1_000_000), "1.0M");
        assert_eq!(format_compact(1_250_000), "1.3M");
        assert_eq!(format_compact(2_000_000), "2.0M");
        assert_eq!(format_compact(12_340_000), "12.3M");
    }

    #[test]
    fn compact_negative_is_plain() {
        assert_eq!(format_compact(-5_000), "-5000");
    }

    #[test]
    fn compact_missing_is_zero() {
        assert_eq!(format_compact_opt(None), "0");
    }

    #[test]
    fn full_groups_thousands() {
        assert_eq!(format_full(Some(0)), "0");
        assert_eq!(format_full(Some(999)), "999");
        assert_eq!(format_full(Some(1_000)), "1\u{a0}000");
        assert_eq!(format_full(Some(1_500_000)), "1\u{a0}500\u{a0}000");
        assert_eq!(format_full(Some(-45_000)), "-45\u{a0}000");
    }

    #[test]
    fn full_treats_missing_as_zero() {
        assert_eq!(format_full(None), format_full(Some(0)));
    }

    #[test]
    fn full_currency_appends_suffix() {
        assert_eq!(format_full_currency(Some(300_000)), "300\u{a0}000 UZS");
    }

    #[test]
    fn date_uses_timezone_and_short_month() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 9, 41, 0).unwrap();
        assert_eq!(format_date(&ts, chrono_tz::Asia::Tashkent), "mar 5, 14:41");
        assert_eq!(format_date(&ts, chrono_tz::UTC), "mar 5, 09:41");
    }

    #[test]
    fn date_rolls_over_day_boundary() {
        let ts = Utc.with_ymd_and_hms(2023, 12, 31, 22, 5, 0).unwrap();
        assert_eq!(format_date(&ts, chrono_tz::Asia::Tashkent), "yan 1, 03:05");
    }

    #[test]
    fn percent_relative_to_max() {
        assert_eq!(percent_of(150_000, 300_000), 50);
        assert_eq!(percent_of(300_000, 300_000), 100);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(10, 0), 0);
    }
}
