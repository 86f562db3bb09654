#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use ragenda::models::event::Event;
use std::env;
use std::fs;
use std::path::PathBuf;

/// ragenda binary with HOME pointed at a per-test directory, so no real
/// configuration is read or written.
pub fn rag(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("ragenda");
    cmd.env("HOME", test_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create (and reset) a temp HOME for a test
pub fn test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ragenda_home", name));
    let p = path.to_string_lossy().to_string();
    fs::create_dir_all(&p).ok();
    p
}

/// Write a JSON events file inside tempdir and return its path
pub fn events_file(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_events.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, json).expect("write events file");
    p
}

/// A small agenda around 1402/07/01 (2023-09-23)
pub const SAMPLE_EVENTS: &str = r#"[
  {"_id": "1", "title": "Math exam", "description": "Chapters 1 to 3", "persianDate": "1402/07/01", "timeSlot": "08:00", "teacherCode": "t-100", "courseCode": "c-math", "classCode": "101"},
  {"_id": "2", "title": "Physics quiz", "description": "", "persianDate": "1402/07/02", "teacherCode": "t-200"},
  {"_id": "3", "title": "Field trip", "description": "Museum visit", "persianDate": "۱۴۰۲/۰۷/۰۴", "data": {"bus": "B2"}},
  {"_id": "4", "title": "Parents meeting", "description": "", "persianDate": "1402/06/30"}
]"#;

/// Reference lists matching the codes used in `SAMPLE_EVENTS`.
pub const SAMPLE_TEACHERS: &str = r#"[
  {"_id": "a1", "username": "t-100", "firstName": "Sara", "lastName": "Ahmadi"},
  {"_id": "a2", "username": "t-300", "firstName": "Reza", "lastName": "Karimi"}
]"#;

pub const SAMPLE_COURSES: &str = r#"[
  {"_id": "b1", "courseCode": "c-math", "courseName": "Mathematics"}
]"#;

pub const SAMPLE_CLASSES: &str = r#"[
  {"_id": "c1", "classCode": 101, "className": "Grade 10 A"}
]"#;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn sample_events() -> Vec<Event> {
    serde_json::from_str(SAMPLE_EVENTS).expect("sample events parse")
}
