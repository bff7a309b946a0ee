//! Expiry calculator: whole days between "now" and a document expiry date.
//!
//! Both operands are truncated to midnight before differencing, so a
//! document expiring today always yields exactly `0` regardless of the
//! time of day the calculation runs. The difference is a ceiling division
//! of the millisecond delta by one day, which keeps the count stable under
//! sub-24-hour offsets between the two operands.

use chrono::{NaiveDate, NaiveDateTime};

/// Milliseconds in one day, the divisor for the day-count ceiling division.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Returns the signed number of whole days from `now` until `expiry`.
///
/// `now` is an explicit parameter on purpose: the engine never reads the
/// wall clock, so callers (and tests) control the reference instant.
///
/// # Arguments
///
/// * `expiry` - The document's expiry date
/// * `now` - The reference instant; only its date component matters
///
/// # Returns
///
/// The number of whole days from the start of `now`'s day to the start of
/// the expiry day. Zero means the document expires today; negative values
/// mean it expired that many days ago.
///
/// # Examples
///
/// ```
/// use compliance_engine::classification::days_until;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2026, 8, 6)
///     .unwrap()
///     .and_hms_opt(14, 30, 0)
///     .unwrap();
///
/// // Mid-day "now" never shifts the count: expiry today is exactly 0
/// assert_eq!(days_until(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(), now), 0);
/// assert_eq!(days_until(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(), now), 1);
/// assert_eq!(days_until(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(), now), -5);
/// ```
pub fn days_until(expiry: NaiveDate, now: NaiveDateTime) -> i64 {
    let now_midnight = now
        .date()
        .and_hms_opt(0, 0, 0)
        .expect("Valid midnight time");
    let expiry_midnight = expiry.and_hms_opt(0, 0, 0).expect("Valid midnight time");

    let delta_millis = (expiry_midnight - now_midnight).num_milliseconds();
    // Equivalent to `delta_millis.div_ceil(MILLIS_PER_DAY)`, which is still
    // unstable for signed integers (int_roundings, issue #88581).
    let quotient = delta_millis / MILLIS_PER_DAY;
    let remainder = delta_millis % MILLIS_PER_DAY;
    if remainder > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Returns the days remaining for an optional expiry date.
///
/// `None` propagates: a document without an expiry date has no day count,
/// and downstream classification maps that to the `missing` status. This is
/// the invariant tying the two together: the result is `None` if and only
/// if no expiry date was supplied.
///
/// # Example
///
/// ```
/// use compliance_engine::classification::days_until_opt;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2026, 8, 6)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
///
/// assert_eq!(days_until_opt(None, now), None);
/// assert_eq!(
///     days_until_opt(NaiveDate::from_ymd_opt(2026, 8, 11), now),
///     Some(5)
/// );
/// ```
pub fn days_until_opt(expiry: Option<NaiveDate>, now: NaiveDateTime) -> Option<i64> {
    expiry.map(|date| days_until(date, now))
}

/// Leniently parses an expiry date from a raw string.
///
/// HR uploads and portal submissions deliver dates in several shapes; this
/// tries them in order and returns `None` on any failure instead of
/// erroring, so classification stays total (an unparseable date reads as a
/// missing document).
///
/// Accepted shapes:
/// - ISO date: `2026-08-06`
/// - ISO datetime: `2026-08-06T14:30:00`
/// - RFC 3339: `2026-08-06T14:30:00+03:00`
/// - Day-first: `06/08/2026`
///
/// # Example
///
/// ```
/// use compliance_engine::classification::parse_expiry_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 8, 6);
/// assert_eq!(parse_expiry_date("2026-08-06"), expected);
/// assert_eq!(parse_expiry_date("2026-08-06T14:30:00+03:00"), expected);
/// assert_eq!(parse_expiry_date("06/08/2026"), expected);
/// assert_eq!(parse_expiry_date("soon"), None);
/// ```
pub fn parse_expiry_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Some(date);
    }

    None
}
