use crate::cli::parser::Commands;
use crate::core::calculator::birthday::{age, days_until_birthday};
use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::jalali::JalaliDate;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Birthday { date } = cmd {
        let birth = JalaliDate::parse(date)?;
        let today = JalaliDate::from_gregorian(clock.today())?;

        let days = days_until_birthday(&birth, &today)?;
        let years = age(&birth, &today);

        if days == 0 {
            success(format!("🎂 امروز! Age: {years}"));
        } else {
            info(format!("Next birthday in {days} days ({days} روز دیگر). Age: {years}"));
        }
    }
    Ok(())
}
