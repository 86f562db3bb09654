use super::{clock_for, events_for, references_for, resolve_month};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::{Agenda, LabeledEvent};
use crate::errors::AppResult;
use crate::models::reference::References;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_tone, paint};
use crate::utils::formatting::signed_days;
use crate::utils::table::{Column, Table};

const DESCRIPTION_WIDTH: usize = 60;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Agenda {
        month,
        filter,
        teacher,
        fields,
        json,
    } = &cli.command
    {
        let clock = clock_for(cli)?;
        let events = events_for(cli, cfg, teacher.as_deref())?;
        let reference = resolve_month(month, None, None, clock.as_ref())?;

        let agenda = Agenda::new(&events, clock.as_ref(), cfg.day_count);
        let grid = agenda.month(reference, filter)?;
        let labeled = agenda.grid_events(&grid)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&labeled)?);
            return Ok(());
        }

        header(format!("{} ({})", grid.title, reference.format("%Y-%m")));

        if labeled.is_empty() {
            info("No events in this month.");
            return Ok(());
        }

        let refs = references_for(cli, cfg)?;
        print!("{}", render_table(&labeled, fields));
        print_details(&labeled, &refs);
    }
    Ok(())
}

fn render_table(labeled: &[LabeledEvent], fields: &[String]) -> String {
    let mut columns = vec![
        Column::new("DATE", 10),
        Column::new("DAYS", 5),
        Column::new("BADGE", 12),
        Column::new("TITLE", 20),
    ];
    columns.extend(fields.iter().map(|f| Column::new(f, f.len())));

    let mut table = Table::new(columns);
    for item in labeled {
        let mut row = vec![
            item.event.persian_date.clone(),
            signed_days(item.offset),
            item.label.text.clone(),
            item.event.title.clone(),
        ];
        row.extend(fields.iter().map(|f| item.event.field_or(f, "-")));
        table.add_row(row);
    }
    table.fit();

    // colour the badge column after widths are fixed
    let rendered = table.render();
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        let line = match i.checked_sub(1).and_then(|r| labeled.get(r)) {
            Some(item) => line.replacen(
                &item.label.text,
                &paint(&item.label.text, color_for_tone(item.label.tone)),
                1,
            ),
            None => line.to_string(),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn print_details(labeled: &[LabeledEvent], refs: &References) {
    for item in labeled {
        let details = refs.event_details(&item.event);
        let description = item.event.description.trim();
        if details.is_empty() && description.is_empty() {
            continue;
        }

        println!("\n{} - {}", item.event.persian_date, item.event.title);
        if !details.is_empty() {
            println!("    {}", details.join(" | "));
        }
        if !description.is_empty() {
            for line in textwrap::wrap(description, DESCRIPTION_WIDTH) {
                println!("    {line}");
            }
        }
    }
}
