use crate::models::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An agenda event as served by the events endpoint.
///
/// Only `persianDate` is required; the typed fields mirror what the agenda
/// displays and everything else is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    pub persian_date: String, // "YYYY/MM/DD", possibly with Persian digits
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_slot: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub teacher_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub course_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub class_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub school_code: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Minimal constructor, mostly for tests and CLI-built events.
    pub fn new(title: &str, persian_date: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            description: String::new(),
            persian_date: persian_date.to_string(),
            date: None,
            time_slot: None,
            teacher_code: None,
            course_code: None,
            class_code: None,
            school_code: None,
            extra: Map::new(),
        }
    }

    /// Read a field by its JSON name.
    ///
    /// Resolution order: typed field, then a top-level extra field, then the
    /// same key inside a nested `data` object. Returns `None` when absent.
    pub fn field(&self, name: &str) -> Option<Value> {
        let typed = match name {
            "_id" => self.id.clone(),
            "title" => Some(self.title.clone()),
            "description" => Some(self.description.clone()),
            "persianDate" => Some(self.persian_date.clone()),
            "date" => self.date.clone(),
            "timeSlot" => self.time_slot.clone(),
            "teacherCode" => self.teacher_code.clone(),
            "courseCode" => self.course_code.clone(),
            "classCode" => self.class_code.clone(),
            "schoolCode" => self.school_code.clone(),
            _ => None,
        };
        if let Some(v) = typed {
            return Some(Value::String(v));
        }

        if let Some(v) = self.extra.get(name) {
            return Some(v.clone());
        }

        self.extra
            .get("data")
            .and_then(Value::as_object)
            .and_then(|data| data.get(name))
            .cloned()
    }

    /// [`Event::field`] rendered as display text, or `default`.
    pub fn field_or(&self, name: &str, default: &str) -> String {
        match self.field(name) {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => default.to_string(),
            Some(other) => other.to_string(),
        }
    }
}
