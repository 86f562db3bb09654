use crate::core::calculator::days::{DayCountMode, days_remaining, label_for};
use crate::core::calculator::grid::build_month_grid;
use crate::core::clock::Clock;
use crate::core::grouping::{filter_events, group_events_by_date};
use crate::errors::AppResult;
use crate::models::day_cell::MonthGrid;
use crate::models::event::Event;
use crate::models::label::RelativeDayLabel;
use chrono::NaiveDate;
use serde::Serialize;

/// An event together with its day offset and badge.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledEvent {
    pub event: Event,
    pub offset: i64,
    pub label: RelativeDayLabel,
}

/// The agenda view: a fetched event list, a clock and the counting mode.
pub struct Agenda<'a, C: Clock + ?Sized> {
    events: &'a [Event],
    clock: &'a C,
    mode: DayCountMode,
}

impl<'a, C: Clock + ?Sized> Agenda<'a, C> {
    pub fn new(events: &'a [Event], clock: &'a C, mode: DayCountMode) -> Self {
        Self {
            events,
            clock,
            mode,
        }
    }

    /// Grid for the month containing `reference`, with events matching `filter`.
    pub fn month(&self, reference: NaiveDate, filter: &str) -> AppResult<MonthGrid> {
        let visible = filter_events(self.events, filter);
        let index = group_events_by_date(&visible);
        build_month_grid(reference, self.clock.today(), &index)
    }

    /// Label every event against today's Persian date.
    pub fn label(&self, events: &[Event]) -> AppResult<Vec<LabeledEvent>> {
        let today = self.clock.today_persian()?;
        Ok(events
            .iter()
            .map(|ev| {
                let offset = days_remaining(&ev.persian_date, &today, self.mode);
                LabeledEvent {
                    event: ev.clone(),
                    offset,
                    label: label_for(offset),
                }
            })
            .collect())
    }

    /// Events shown in a grid, in cell order, labeled.
    pub fn grid_events(&self, grid: &MonthGrid) -> AppResult<Vec<LabeledEvent>> {
        let events: Vec<Event> = grid
            .cells
            .iter()
            .flat_map(|c| c.events.iter().cloned())
            .collect();
        self.label(&events)
    }
}
