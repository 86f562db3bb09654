//! Event source: the JSON array served by the events endpoint, read from a
//! file or from stdin (`-`). Teacher, course and class lists are read the
//! same way from their own files.

use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::reference::References;
use crate::utils::path::expand_tilde;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Raw text of `path`; `None` when the file does not exist.
fn read_source(path: &str) -> AppResult<Option<String>> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(Some(buf));
    }
    let p = expand_tilde(path);
    if !p.exists() {
        return Ok(None);
    }
    Ok(Some(std::fs::read_to_string(&p)?))
}

fn display_path(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

pub fn load_events(path: &str) -> AppResult<Vec<Event>> {
    let raw = read_source(path)?.ok_or_else(|| AppError::EventsNotFound(display_path(path)))?;

    let events = parse_events(&raw)?;
    tracing::debug!(path, count = events.len(), "events loaded");
    Ok(events)
}

/// Parse a JSON array of events. Blank input is an empty list.
pub fn parse_events(raw: &str) -> AppResult<Vec<Event>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}

/// Like [`load_events`], but a missing file is an empty agenda.
pub fn load_events_or_empty(path: &str) -> AppResult<Vec<Event>> {
    match load_events(path) {
        Err(AppError::EventsNotFound(p)) => {
            tracing::info!(path = %p, "no events file, starting with an empty agenda");
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Parse a JSON array of reference records (teachers, courses or classes).
pub fn parse_reference<T: DeserializeOwned>(raw: &str, origin: &str) -> AppResult<Vec<T>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| AppError::InvalidReference(format!("{origin}: {e}")))
}

/// Load one reference list. With `required`, a missing file is an error;
/// otherwise it is logged and treated as an empty list.
pub fn load_reference<T: DeserializeOwned>(path: &str, required: bool) -> AppResult<Vec<T>> {
    match read_source(path)? {
        Some(raw) => {
            let records: Vec<T> = parse_reference(&raw, path)?;
            tracing::debug!(path, count = records.len(), "reference list loaded");
            Ok(records)
        }
        None if required => Err(AppError::ReferenceNotFound(display_path(path))),
        None => {
            tracing::info!(path, "no reference file, showing raw codes");
            Ok(Vec::new())
        }
    }
}

/// Where each reference list comes from; `None` leaves that list empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferencePaths<'a> {
    pub teachers: Option<(&'a str, bool)>,
    pub courses: Option<(&'a str, bool)>,
    pub classes: Option<(&'a str, bool)>,
}

pub fn load_references(paths: ReferencePaths<'_>) -> AppResult<References> {
    fn list<T: DeserializeOwned>(source: Option<(&str, bool)>) -> AppResult<Vec<T>> {
        match source {
            Some((path, required)) => load_reference(path, required),
            None => Ok(Vec::new()),
        }
    }

    Ok(References {
        teachers: list(paths.teachers)?,
        courses: list(paths.courses)?,
        classes: list(paths.classes)?,
    })
}
