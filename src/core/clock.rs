use crate::errors::{AppError, AppResult};
use crate::jalali::JalaliDate;
use chrono::NaiveDate;

/// Source of "today" for grid builds and day offsets.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Today as a normalized Persian date string.
    fn today_persian(&self) -> AppResult<String> {
        crate::jalali::format_persian_date(self.today())
    }
}

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to one day (tests, `--today`).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl FixedClock {
    /// Accepts either a Gregorian `YYYY-MM-DD` or a Persian `YYYY/MM/DD` date.
    pub fn parse(s: &str) -> AppResult<Self> {
        parse_any_date(s).map(FixedClock)
    }
}

/// Parse a Gregorian `YYYY-MM-DD` or a Jalali `YYYY/MM/DD` (any digit script)
/// into a Gregorian date.
pub fn parse_any_date(s: &str) -> AppResult<NaiveDate> {
    let normalized = crate::utils::digits::to_ascii_digits(s.trim());
    if let Ok(d) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return Ok(d);
    }
    if normalized.contains('/') {
        return JalaliDate::parse(&normalized)?.to_gregorian();
    }
    Err(AppError::InvalidDate(s.to_string()))
}
