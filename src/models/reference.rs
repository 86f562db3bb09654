use crate::models::event::Event;
use crate::models::lenient;
use serde::{Deserialize, Serialize};

/// A teacher record; events refer to it by `username`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(rename = "_id", default, deserialize_with = "lenient::option")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_name: String,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", default, deserialize_with = "lenient::option")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub course_code: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub course_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClass {
    #[serde(rename = "_id", default, deserialize_with = "lenient::option")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub class_code: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub class_name: String,
}

/// Lookup tables that turn the codes carried by events into display names.
///
/// Every lookup falls back to the code itself when no record matches, so an
/// empty `References` simply echoes codes back.
#[derive(Debug, Clone, Default)]
pub struct References {
    pub teachers: Vec<Teacher>,
    pub courses: Vec<Course>,
    pub classes: Vec<SchoolClass>,
}

impl References {
    pub fn teacher_name(&self, code: &str) -> String {
        self.teachers
            .iter()
            .find(|t| t.username == code)
            .map(Teacher::full_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| code.to_string())
    }

    pub fn course_name(&self, code: &str) -> String {
        self.courses
            .iter()
            .find(|c| c.course_code == code)
            .map(|c| c.course_name.clone())
            .unwrap_or_else(|| code.to_string())
    }

    pub fn class_name(&self, code: &str) -> String {
        self.classes
            .iter()
            .find(|c| c.class_code == code)
            .map(|c| c.class_name.clone())
            .unwrap_or_else(|| code.to_string())
    }

    /// Session, teacher, course and class of an event, codes resolved to
    /// names. Missing fields are left out.
    pub fn event_details(&self, event: &Event) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(slot) = present(&event.time_slot) {
            parts.push(format!("زنگ {slot}"));
        }
        if let Some(code) = present(&event.teacher_code) {
            parts.push(format!("استاد: {}", self.teacher_name(code)));
        }
        if let Some(code) = present(&event.course_code) {
            parts.push(format!("درس: {}", self.course_name(code)));
        }
        if let Some(code) = present(&event.class_code) {
            parts.push(format!("کلاس: {}", self.class_name(code)));
        }
        parts
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
