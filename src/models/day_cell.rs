use super::event::Event;
use chrono::NaiveDate;
use serde::Serialize;

/// One cell of the 6×7 month grid.
#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,     // Gregorian date of the cell
    pub day: u32,            // Gregorian day of month
    pub persian_day: String, // normalized "YYYY/MM/DD"
    pub events: Vec<Event>,
    pub is_current_month: bool,
    pub is_today: bool,
}

impl DayCell {
    /// Jalali day of month without leading zeros ("1402/07/05" → "5").
    pub fn persian_day_number(&self) -> &str {
        let mut parts = self.persian_day.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(_), Some(day), None) => {
                let trimmed = day.trim_start_matches('0');
                if trimmed.is_empty() { day } else { trimmed }
            }
            _ => "",
        }
    }
}

/// A full month view: heading plus exactly 42 cells.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub reference: NaiveDate,
    pub title: String,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub const CELLS: usize = 42;
    pub const COLUMNS: usize = 7;

    /// Cells grouped into 6 Saturday-first weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(Self::COLUMNS)
    }

    pub fn current_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| c.is_current_month)
    }
}
