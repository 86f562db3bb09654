use crate::errors::AppResult;
use crate::jalali::{JalaliDate, month_length};

/// Days until the next occurrence of a Jalali birthday (0 on the day itself).
///
/// Esfand 30 birthdays are celebrated on Esfand 29 in common years.
pub fn days_until_birthday(birth: &JalaliDate, today: &JalaliDate) -> AppResult<i64> {
    let passed = (birth.month, birth.day) < (today.month, today.day);
    let year = if passed { today.year + 1 } else { today.year };

    let next = anniversary_in(birth, year)?;
    Ok(next.day_number()? as i64 - today.day_number()? as i64)
}

/// Completed years, never negative.
pub fn age(birth: &JalaliDate, today: &JalaliDate) -> u32 {
    let mut years = today.year - birth.year;
    if (birth.month, birth.day) > (today.month, today.day) {
        years -= 1;
    }
    years.max(0) as u32
}

fn anniversary_in(birth: &JalaliDate, year: i32) -> AppResult<JalaliDate> {
    let day = birth.day.min(month_length(year, birth.month)?);
    JalaliDate::new(year, birth.month, day)
}
