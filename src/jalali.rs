//! Jalali (Persian solar hijri) calendar helpers.
//!
//! Conversion and leap years come from `icu_calendar`'s Persian calendar.
//! This module keeps the agenda-facing pieces: the coarse `YYYY/MM/DD` text
//! form, month and weekday names, and day numbers expressed as chrono's
//! `num_days_from_ce` so they can be subtracted directly.

use crate::errors::{AppError, AppResult};
use crate::utils::digits::{to_ascii_digits, to_persian_digits};
use chrono::{Datelike, Days, NaiveDate};
use icu_calendar::Date;
use icu_calendar::cal::Persian;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Jalali years converted to and from Gregorian dates.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 3177;

/// Loose range accepted for textual `YYYY/MM/DD` dates.
pub const MIN_TEXT_YEAR: i32 = 1300;
pub const MAX_TEXT_YEAR: i32 = 1500;

pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian weekday names, Saturday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})/([0-9]{2})/([0-9]{2})$").expect("static date regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

fn check_year(year: i32) -> AppResult<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(AppError::JalaliRange(format!("year {year}")))
    }
}

/// First day of a Jalali month in icu's Persian calendar.
fn month_start(year: i32, month: u32) -> AppResult<Date<Persian>> {
    check_year(year)?;
    let m = u8::try_from(month).map_err(|_| AppError::InvalidDate(format!("month {month}")))?;
    Date::try_new_persian(year, m, 1).map_err(|e| AppError::InvalidDate(e.to_string()))
}

pub fn is_leap_year(year: i32) -> AppResult<bool> {
    Ok(month_start(year, 1)?.is_in_leap_year())
}

/// Number of days in a Jalali month (1..=12).
pub fn month_length(year: i32, month: u32) -> AppResult<u32> {
    Ok(u32::from(month_start(year, month)?.days_in_month()))
}

impl JalaliDate {
    /// Build a date, checking the month and the real month length.
    pub fn new(year: i32, month: u32, day: u32) -> AppResult<Self> {
        let len = month_length(year, month)?;
        if day == 0 || day > len {
            return Err(AppError::InvalidDate(format!(
                "{year:04}/{month:02}/{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Parse a `YYYY/MM/DD` string (Persian or Arabic-Indic digits allowed).
    ///
    /// Only the coarse ranges are checked: year 1300–1500, month 1–12 and
    /// day 1–31. Month lengths are not enforced, so `1402/07/31` parses and
    /// behaves like `1402/08/01` in day arithmetic.
    pub fn parse(input: &str) -> AppResult<Self> {
        let normalized = to_ascii_digits(input.trim());
        let caps = DATE_SHAPE
            .captures(&normalized)
            .ok_or_else(|| AppError::InvalidDate(input.to_string()))?;

        let num = |i: usize| -> AppResult<u32> {
            caps[i]
                .parse::<u32>()
                .map_err(|_| AppError::InvalidDate(input.to_string()))
        };
        let year = num(1)? as i32;
        let month = num(2)?;
        let day = num(3)?;

        if !(MIN_TEXT_YEAR..=MAX_TEXT_YEAR).contains(&year)
            || !(1..=12).contains(&month)
            || !(1..=31).contains(&day)
        {
            return Err(AppError::InvalidDate(input.to_string()));
        }

        Ok(Self { year, month, day })
    }

    pub fn from_gregorian(date: NaiveDate) -> AppResult<Self> {
        let out_of_range = |e: icu_calendar::RangeError| AppError::JalaliRange(e.to_string());
        // chrono months and days always fit in a u8
        let iso = Date::try_new_iso(date.year(), date.month() as u8, date.day() as u8)
            .map_err(out_of_range)?;
        let persian = iso.to_calendar(Persian);

        let year = persian.extended_year();
        check_year(year)?;
        Ok(Self {
            year,
            month: u32::from(persian.month().ordinal),
            day: u32::from(persian.day_of_month().0),
        })
    }

    /// Absolute day number (chrono's days from CE), leap-aware.
    pub fn day_number(&self) -> AppResult<i32> {
        Ok(self.to_gregorian()?.num_days_from_ce())
    }

    /// Gregorian date of this Jalali date. Days past the end of the month
    /// (accepted by [`JalaliDate::parse`]) roll into the following month.
    pub fn to_gregorian(&self) -> AppResult<NaiveDate> {
        let iso = month_start(self.year, self.month)
            .map_err(|_| AppError::JalaliRange(self.to_string()))?
            .to_iso();
        let first = NaiveDate::from_ymd_opt(
            iso.extended_year(),
            u32::from(iso.month().ordinal),
            u32::from(iso.day_of_month().0),
        );
        first
            .and_then(|d| d.checked_add_days(Days::new(u64::from(self.day.saturating_sub(1)))))
            .ok_or_else(|| AppError::JalaliRange(self.to_string()))
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// Month heading such as `مهر ۱۴۰۲`.
    pub fn month_title(&self) -> String {
        format!(
            "{} {}",
            self.month_name(),
            to_persian_digits(&self.year.to_string())
        )
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for JalaliDate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Gregorian date → normalized `YYYY/MM/DD` Persian date string.
pub fn format_persian_date(date: NaiveDate) -> AppResult<String> {
    Ok(JalaliDate::from_gregorian(date)?.to_string())
}
