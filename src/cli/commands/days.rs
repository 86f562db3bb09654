use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::days::{DayCountMode, days_remaining, label_for};
use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::utils::colors::{color_for_tone, paint};
use crate::utils::formatting::signed_days;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Days { date, approximate } = cmd {
        let mode = if *approximate {
            DayCountMode::Approximate
        } else {
            cfg.day_count
        };

        let today = clock.today_persian()?;
        let offset = days_remaining(date, &today, mode);
        let label = label_for(offset);

        println!(
            "{} → {}  ({} days)  {}",
            today,
            date,
            signed_days(offset),
            paint(&label.text, color_for_tone(label.tone))
        );
    }
    Ok(())
}
