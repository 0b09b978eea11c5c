//! Business-day arithmetic for shipping deadlines.
//!
//! A business day is Monday through Friday. Advancing walks one calendar
//! day at a time and only counts weekdays, so a Friday plus one business
//! day lands on the following Monday. Holiday calendars are a pluggable
//! predicate; no holiday data ships with the core, which is a documented
//! gap rather than an oversight.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc, Weekday};
use thiserror::Error;

/// Errors returned by the business-day calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessDayError {
    /// The requested business-day count was below zero.
    #[error("business-day count must not be negative, got {count}")]
    NegativeDayCount {
        /// The rejected count.
        count: i64,
    },
    /// Advancing stepped past the representable calendar range.
    #[error("deadline left the representable calendar range")]
    OutOfRange,
}

/// Predicate marking dates that do not count as business days beyond the
/// weekend rule.
pub trait HolidayCalendar {
    /// Return `true` when `date` is a holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Calendar with no holidays at all, the shop's current behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Advance `start` by `business_days` weekdays, skipping weekends.
///
/// Zero days is a valid no-op returning `start` unchanged; negative
/// counts are rejected. The time of day is preserved.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use storefront::domain::advance_business_days;
///
/// let friday = Utc.with_ymd_and_hms(2024, 6, 7, 15, 30, 0).unwrap();
/// let monday = Utc.with_ymd_and_hms(2024, 6, 10, 15, 30, 0).unwrap();
/// assert_eq!(advance_business_days(friday, 1)?, monday);
/// # Ok::<(), storefront::domain::BusinessDayError>(())
/// ```
pub fn advance_business_days(
    start: DateTime<Utc>,
    business_days: i64,
) -> Result<DateTime<Utc>, BusinessDayError> {
    advance_business_days_with(start, business_days, &NoHolidays)
}

/// [`advance_business_days`] with an explicit holiday calendar.
pub fn advance_business_days_with<C: HolidayCalendar>(
    start: DateTime<Utc>,
    business_days: i64,
    calendar: &C,
) -> Result<DateTime<Utc>, BusinessDayError> {
    if business_days < 0 {
        return Err(BusinessDayError::NegativeDayCount {
            count: business_days,
        });
    }

    let mut current = start;
    let mut remaining = business_days;
    while remaining > 0 {
        current = current
            .checked_add_signed(TimeDelta::days(1))
            .ok_or(BusinessDayError::OutOfRange)?;
        if matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        if calendar.is_holiday(current.date_naive()) {
            continue;
        }
        remaining -= 1;
    }
    Ok(current)
}
