//! Time-to-expiry as a year fraction
//!
//! Whole calendar days between two dates divided by 365 (fixed
//! convention, not 360 or 252).

use chrono::{NaiveDate, Utc};

/// Days per year for the calendar-day convention
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Year fraction between a reference date and a target date.
///
/// Uses the absolute day difference, so a target in the past yields the
/// same positive fraction as the mirror-image future date. This mirrors
/// the original system's behavior and is intentionally left unchanged;
/// callers that care should check ordering themselves.
pub fn year_fraction(target: NaiveDate, reference: NaiveDate) -> f64 {
    let days = (target - reference).num_days().abs();
    days as f64 / DAYS_PER_YEAR
}

/// Year fraction from today (UTC) to the target date
pub fn year_fraction_from_today(target: NaiveDate) -> f64 {
    year_fraction(target, Utc::now().date_naive())
}
