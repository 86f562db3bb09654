use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::jalali::{JalaliDate, WEEKDAY_NAMES};
use crate::utils::digits::to_ascii_digits;
use chrono::{Datelike, NaiveDate};

/// `YYYY-MM-DD` → Jalali, `YYYY/MM/DD` → Gregorian.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Convert { date } = cmd {
        let input = to_ascii_digits(date.trim());

        let (gregorian, jalali) = if input.contains('/') {
            let j = JalaliDate::parse(&input)?;
            (j.to_gregorian()?, j)
        } else {
            let g = NaiveDate::parse_from_str(&input, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(date.clone()))?;
            (g, JalaliDate::from_gregorian(g)?)
        };

        // Saturday-first index
        let weekday = (gregorian.weekday().num_days_from_sunday() + 1) % 7;

        println!("Gregorian : {}", gregorian.format("%Y-%m-%d (%A)"));
        println!(
            "Jalali    : {} ({} {} {})",
            jalali,
            WEEKDAY_NAMES[weekday as usize],
            jalali.day,
            jalali.month_title()
        );
    }
    Ok(())
}
