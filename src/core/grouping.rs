use crate::models::event::Event;
use crate::utils::digits::to_ascii_digits;
use std::collections::HashMap;

/// Events keyed by normalized Persian date; each list keeps input order.
#[derive(Debug, Default, Clone)]
pub struct EventIndex {
    by_date: HashMap<String, Vec<Event>>,
}

impl EventIndex {
    pub fn get(&self, persian_date: &str) -> &[Event] {
        self.by_date
            .get(&to_ascii_digits(persian_date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

pub fn group_events_by_date(events: &[Event]) -> EventIndex {
    let mut by_date: HashMap<String, Vec<Event>> = HashMap::new();
    for ev in events {
        by_date
            .entry(to_ascii_digits(ev.persian_date.trim()))
            .or_default()
            .push(ev.clone());
    }
    EventIndex { by_date }
}

/// Case-insensitive search on title, description and Persian date.
/// An empty filter keeps everything.
pub fn filter_events(events: &[Event], text: &str) -> Vec<Event> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return events.to_vec();
    }
    let needle_ascii = to_ascii_digits(&needle);

    events
        .iter()
        .filter(|ev| {
            ev.title.to_lowercase().contains(&needle)
                || ev.description.to_lowercase().contains(&needle)
                || to_ascii_digits(&ev.persian_date).contains(&needle_ascii)
        })
        .cloned()
        .collect()
}

/// Keep only the events taught by `teacher` (matched on `teacherCode`).
/// `None` keeps everything.
pub fn scope_to_teacher(events: Vec<Event>, teacher: Option<&str>) -> Vec<Event> {
    let Some(code) = teacher.map(str::trim) else {
        return events;
    };
    let scoped: Vec<Event> = events
        .into_iter()
        .filter(|ev| ev.teacher_code.as_deref().map(str::trim) == Some(code))
        .collect();
    tracing::debug!(teacher = code, count = scoped.len(), "events scoped to teacher");
    scoped
}
