pub mod agenda;
pub mod birthday;
pub mod config;
pub mod convert;
pub mod days;
pub mod grid;
pub mod init;
pub mod normalize;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calculator::grid::{parse_month, shift_months};
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::grouping::scope_to_teacher;
use crate::core::source::{ReferencePaths, load_events, load_events_or_empty, load_references};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::reference::References;
use chrono::NaiveDate;

/// Clock for this run: `--today` pins it, otherwise the wall clock.
pub fn clock_for(cli: &Cli) -> AppResult<Box<dyn Clock>> {
    match &cli.today {
        Some(s) => Ok(Box::new(FixedClock::parse(s)?)),
        None => Ok(Box::new(SystemClock)),
    }
}

/// Events from `--events` (must exist) or from the configured file
/// (missing file = empty agenda), scoped to `teacher` when given.
pub fn events_for(cli: &Cli, cfg: &Config, teacher: Option<&str>) -> AppResult<Vec<Event>> {
    let events = match &cli.events {
        Some(path) => load_events(path)?,
        None => load_events_or_empty(&cfg.events_file)?,
    };
    Ok(scope_to_teacher(events, teacher))
}

/// Teacher, course and class lists. Files named on the command line must
/// exist; files from the configuration are optional.
pub fn references_for(cli: &Cli, cfg: &Config) -> AppResult<References> {
    fn pick<'a>(
        flag: &'a Option<String>,
        configured: &'a Option<String>,
    ) -> Option<(&'a str, bool)> {
        match (flag, configured) {
            (Some(path), _) => Some((path.as_str(), true)),
            (None, Some(path)) => Some((path.as_str(), false)),
            (None, None) => None,
        }
    }

    load_references(ReferencePaths {
        teachers: pick(&cli.teachers, &cfg.teachers_file),
        courses: pick(&cli.courses, &cfg.courses_file),
        classes: pick(&cli.classes, &cfg.classes_file),
    })
}

/// Month to display: `--month` or today's month, shifted by `--prev` / `--next`.
pub fn resolve_month(
    month: &Option<String>,
    prev: Option<u32>,
    next: Option<u32>,
    clock: &dyn Clock,
) -> AppResult<NaiveDate> {
    let base = match month {
        Some(m) => parse_month(m)?,
        None => clock.today(),
    };
    let steps = |n: Option<u32>| {
        let n = n.unwrap_or(0);
        i32::try_from(n).map_err(|_| AppError::InvalidMonth(format!("cannot move {n} months")))
    };
    shift_months(base, steps(next)? - steps(prev)?)
}
