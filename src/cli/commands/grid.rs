use super::{clock_for, events_for, resolve_month};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Agenda;
use crate::errors::AppResult;
use crate::jalali::WEEKDAY_NAMES;
use crate::models::day_cell::{DayCell, MonthGrid};
use crate::ui::messages::header;
use crate::utils::colors::{color_for_cell, color_for_tone, paint};
use crate::utils::digits::to_persian_digits;
use crate::utils::formatting::{center, more_events};

const CELL_WIDTH: usize = 10;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid {
        month,
        prev,
        next,
        filter,
        teacher,
    } = &cli.command
    {
        let clock = clock_for(cli)?;
        let events = events_for(cli, cfg, teacher.as_deref())?;
        let reference = resolve_month(month, *prev, *next, clock.as_ref())?;

        let agenda = Agenda::new(&events, clock.as_ref(), cfg.day_count);
        let grid = agenda.month(reference, filter)?;

        header(format!("{} ({})", grid.title, reference.format("%Y-%m")));
        print!("{}", render_grid(&grid, cfg));
        println!();

        for cell in grid.cells.iter().filter(|c| !c.events.is_empty()) {
            let labeled = agenda.label(&cell.events)?;
            println!("{}", cell.persian_day);

            for item in labeled.iter().take(cfg.max_events_per_cell) {
                println!(
                    "  • {}  {}",
                    item.event.title,
                    paint(&item.label.text, color_for_tone(item.label.tone))
                );
            }
            if labeled.len() > cfg.max_events_per_cell {
                println!("  {}", more_events(labeled.len() - cfg.max_events_per_cell));
            }
        }
    }
    Ok(())
}

/// Six rows of seven cells under the Persian weekday names.
pub fn render_grid(grid: &MonthGrid, cfg: &Config) -> String {
    let mut out = String::new();

    for name in WEEKDAY_NAMES {
        out.push_str(&center(name, CELL_WIDTH));
        out.push('|');
    }
    out.push('\n');
    out.push_str(&"-".repeat((CELL_WIDTH + 1) * MonthGrid::COLUMNS));
    out.push('\n');

    for week in grid.weeks() {
        for cell in week {
            let text = center(&cell_text(cell, cfg), CELL_WIDTH);
            out.push_str(&paint(&text, color_for_cell(cell.is_today, cell.is_current_month)));
            out.push('|');
        }
        out.push('\n');
    }

    out
}

fn cell_text(cell: &DayCell, cfg: &Config) -> String {
    let mut text = cell.persian_day_number().to_string();
    if cfg.show_gregorian {
        text.push_str(&format!("({})", cell.day));
    }
    if !cell.events.is_empty() {
        text.push_str(&format!("•{}", cell.events.len()));
    }
    if cfg.persian_digits {
        text = to_persian_digits(&text);
    }
    text
}
