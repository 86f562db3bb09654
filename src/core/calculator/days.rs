use crate::errors::AppResult;
use crate::jalali::JalaliDate;
use crate::models::label::{RelativeDayLabel, Tone};
use crate::utils::digits::to_ascii_digits;
use serde::{Deserialize, Serialize};

/// How day offsets between two Persian dates are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCountMode {
    /// Real Jalali calendar, leap years included.
    #[default]
    Calendar,
    /// `y*365 + month offsets + d` with Esfand fixed at 29 days.
    /// Off by one across the end of a leap year.
    Approximate,
}

/// Signed number of days from `today` to `event_date` (positive = future).
///
/// Both inputs are `YYYY/MM/DD` strings in any digit script. Malformed or
/// out-of-range input is logged and yields 0.
pub fn days_remaining(event_date: &str, today: &str, mode: DayCountMode) -> i64 {
    let event_norm = to_ascii_digits(event_date.trim());
    let today_norm = to_ascii_digits(today.trim());

    if event_norm == today_norm {
        return 0;
    }

    let (event, now) = match (JalaliDate::parse(&event_norm), JalaliDate::parse(&today_norm)) {
        (Ok(e), Ok(t)) => (e, t),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(event_date, today, error = %err, "cannot compute days remaining");
            return 0;
        }
    };

    match offset(&event, &now, mode) {
        Ok(days) => days,
        Err(err) => {
            tracing::warn!(event_date, today, error = %err, "cannot compute days remaining");
            0
        }
    }
}

fn offset(event: &JalaliDate, today: &JalaliDate, mode: DayCountMode) -> AppResult<i64> {
    Ok(match mode {
        DayCountMode::Calendar => event.day_number()? as i64 - today.day_number()? as i64,
        DayCountMode::Approximate => approximate_ordinal(event) - approximate_ordinal(today),
    })
}

fn approximate_ordinal(d: &JalaliDate) -> i64 {
    let months: i64 = (1..d.month).map(legacy_month_length).sum();
    d.year as i64 * 365 + months + d.day as i64
}

fn legacy_month_length(month: u32) -> i64 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ => 29,
    }
}

/// Badge for a day offset: past, today, tomorrow or "N days left".
pub fn label_for(offset: i64) -> RelativeDayLabel {
    let tone = Tone::from_offset(offset);
    let text = match tone {
        Tone::Past => "گذشته".to_string(),
        Tone::Today => "امروز".to_string(),
        Tone::Tomorrow => "فردا".to_string(),
        Tone::Soon | Tone::Later => format!("{offset} روز دیگر"),
    };
    RelativeDayLabel {
        text,
        color_class: tone.color_class(),
        tone,
    }
}

/// Shortcut: offset then label.
pub fn label_event_date(event_date: &str, today: &str, mode: DayCountMode) -> RelativeDayLabel {
    label_for(days_remaining(event_date, today, mode))
}
