use crate::core::grouping::EventIndex;
use crate::errors::{AppError, AppResult};
use crate::jalali::{JalaliDate, format_persian_date};
use crate::models::day_cell::{DayCell, MonthGrid};
use chrono::{Datelike, Days, Months, NaiveDate};

/// Build the 42-cell, Saturday-first grid for the Gregorian month containing
/// `reference`.
///
/// Leading cells come from the end of the previous month, trailing cells from
/// the next one, so the grid is always one contiguous run of days.
pub fn build_month_grid(
    reference: NaiveDate,
    today: NaiveDate,
    events: &EventIndex,
) -> AppResult<MonthGrid> {
    let first = first_of_month(reference)?;

    // 0=Sunday..6=Saturday, rotated so Saturday is column 0
    let offset = (first.weekday().num_days_from_sunday() + 1) % 7;
    let start = first
        .checked_sub_days(Days::new(offset as u64))
        .ok_or_else(|| AppError::InvalidMonth(reference.to_string()))?;

    let today_persian = format_persian_date(today)?;

    let mut cells = Vec::with_capacity(MonthGrid::CELLS);
    for (i, date) in start.iter_days().take(MonthGrid::CELLS).enumerate() {
        let persian_day = format_persian_date(date)?;
        let is_current_month = date.year() == first.year() && date.month() == first.month();
        let is_today = persian_day == today_persian;

        tracing::trace!(cell = i, %date, %persian_day, is_current_month, is_today);

        cells.push(DayCell {
            date,
            day: date.day(),
            events: events.get(&persian_day).to_vec(),
            persian_day,
            is_current_month,
            is_today,
        });
    }

    if cells.len() != MonthGrid::CELLS {
        return Err(AppError::InvalidMonth(reference.to_string()));
    }

    let title = JalaliDate::from_gregorian(reference)?.month_title();
    tracing::debug!(%reference, offset, %title, "month grid built");

    Ok(MonthGrid {
        reference,
        title,
        cells,
    })
}

pub fn first_of_month(d: NaiveDate) -> AppResult<NaiveDate> {
    d.with_day(1)
        .ok_or_else(|| AppError::InvalidMonth(d.to_string()))
}

/// Number of days in the Gregorian month containing `d`.
pub fn days_in_month(d: NaiveDate) -> AppResult<u32> {
    let first = first_of_month(d)?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| AppError::InvalidMonth(d.to_string()))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Same day one month earlier, clamped to the target month's length.
pub fn previous_month(d: NaiveDate) -> AppResult<NaiveDate> {
    d.checked_sub_months(Months::new(1))
        .ok_or_else(|| AppError::InvalidMonth(d.to_string()))
}

/// Same day one month later, clamped to the target month's length.
pub fn next_month(d: NaiveDate) -> AppResult<NaiveDate> {
    d.checked_add_months(Months::new(1))
        .ok_or_else(|| AppError::InvalidMonth(d.to_string()))
}

/// Move `n` months forward (positive) or backward (negative).
pub fn shift_months(d: NaiveDate, n: i32) -> AppResult<NaiveDate> {
    let months = Months::new(n.unsigned_abs());
    let shifted = if n >= 0 {
        d.checked_add_months(months)
    } else {
        d.checked_sub_months(months)
    };
    shifted.ok_or_else(|| AppError::InvalidMonth(d.to_string()))
}

/// Parse a `YYYY-MM` month selector into its first day.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    let normalized = crate::utils::digits::to_ascii_digits(s.trim());
    NaiveDate::parse_from_str(&format!("{normalized}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}
