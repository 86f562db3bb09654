mod common;
use common::{
    SAMPLE_CLASSES, SAMPLE_COURSES, SAMPLE_EVENTS, SAMPLE_TEACHERS, sample_events, ymd,
};
use ragenda::core::calculator::days::DayCountMode;
use ragenda::core::clock::{Clock, FixedClock, parse_any_date};
use ragenda::core::grouping::scope_to_teacher;
use ragenda::core::logic::Agenda;
use ragenda::core::source::{parse_events, parse_reference};
use ragenda::errors::AppError;
use ragenda::models::reference::{References, Teacher};
use ragenda::models::label::Tone;
use serde_json::json;

#[test]
fn test_events_parse_with_optional_and_unknown_fields() {
    let events = parse_events(SAMPLE_EVENTS).unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0].id.as_deref(), Some("1"));
    assert_eq!(events[0].time_slot.as_deref(), Some("08:00"));
    assert_eq!(events[3].teacher_code, None);
    assert!(events[2].extra.contains_key("data"));
}

#[test]
fn test_loosely_typed_fields_do_not_reject_the_list() {
    let raw = r#"[
      {"_id": 7, "title": null, "description": null, "persianDate": "1402/07/01",
       "classCode": 101, "courseCode": null, "timeSlot": 2, "teacherCode": true},
      {"_id": "8", "title": "Chemistry lab", "persianDate": "1402/07/02"}
    ]"#;
    let events = parse_events(raw).unwrap();
    assert_eq!(events.len(), 2);

    let ev = &events[0];
    assert_eq!(ev.id.as_deref(), Some("7"));
    assert_eq!(ev.title, "");
    assert_eq!(ev.description, "");
    assert_eq!(ev.class_code.as_deref(), Some("101"));
    assert_eq!(ev.course_code, None);
    assert_eq!(ev.time_slot.as_deref(), Some("2"));
    assert_eq!(ev.teacher_code.as_deref(), Some("true"));
    assert_eq!(ev.field_or("classCode", "-"), "101");
    assert_eq!(events[1].title, "Chemistry lab");

    // the date itself stays mandatory
    assert!(parse_events(r#"[{"title": "x", "persianDate": null}]"#).is_err());
}

#[test]
fn test_blank_input_is_empty_agenda() {
    assert!(parse_events("").unwrap().is_empty());
    assert!(parse_events("  \n").unwrap().is_empty());
    assert!(parse_events("[]").unwrap().is_empty());
    assert!(parse_events("{not json").is_err());
}

#[test]
fn test_field_resolution_order() {
    let events = sample_events();
    assert_eq!(events[0].field_or("teacherCode", "-"), "t-100");
    assert_eq!(events[0].field_or("title", "-"), "Math exam");
    // nested data object
    assert_eq!(events[2].field_or("bus", "-"), "B2");
    // absent everywhere
    assert_eq!(events[3].field_or("bus", "-"), "-");
    assert_eq!(events[3].field("timeSlot"), None);

    let mut ev = events[0].clone();
    ev.extra.insert("room".to_string(), json!(12));
    assert_eq!(ev.field("room"), Some(json!(12)));
    assert_eq!(ev.field_or("room", "-"), "12");
}

#[test]
fn test_unknown_fields_round_trip() {
    let events = sample_events();
    let back = serde_json::to_value(&events[2]).unwrap();
    assert_eq!(back["data"]["bus"], "B2");
    assert_eq!(back["persianDate"], "۱۴۰۲/۰۷/۰۴");
    assert_eq!(back["_id"], "3");
}

#[test]
fn test_fixed_clock_accepts_both_calendars() {
    assert_eq!(FixedClock::parse("2023-09-23").unwrap().today(), ymd(2023, 9, 23));
    assert_eq!(FixedClock::parse("1402/07/01").unwrap().today(), ymd(2023, 9, 23));
    assert_eq!(parse_any_date("۱۴۰۲/۰۷/۰۱").unwrap(), ymd(2023, 9, 23));
    assert!(parse_any_date("yesterday").is_err());
    assert_eq!(
        FixedClock(ymd(2023, 9, 23)).today_persian().unwrap(),
        "1402/07/01"
    );
}

#[test]
fn test_agenda_labels_grid_events() {
    let events = sample_events();
    let clock = FixedClock(ymd(2023, 9, 23));
    let agenda = Agenda::new(&events, &clock, DayCountMode::Calendar);

    let grid = agenda.month(ymd(2023, 9, 1), "").unwrap();
    let labeled = agenda.grid_events(&grid).unwrap();

    // cell order: 06/30, 07/01, 07/02, 07/04
    let offsets: Vec<i64> = labeled.iter().map(|l| l.offset).collect();
    assert_eq!(offsets, [-2, 0, 1, 3]);
    let tones: Vec<Tone> = labeled.iter().map(|l| l.label.tone).collect();
    assert_eq!(tones, [Tone::Past, Tone::Today, Tone::Tomorrow, Tone::Soon]);

    let filtered = agenda.month(ymd(2023, 9, 1), "quiz").unwrap();
    assert_eq!(agenda.grid_events(&filtered).unwrap().len(), 1);
}

#[test]
fn test_scope_to_teacher() {
    let scoped = scope_to_teacher(sample_events(), Some("t-100"));
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].title, "Math exam");

    assert_eq!(scope_to_teacher(sample_events(), Some(" t-200 ")).len(), 1);
    assert!(scope_to_teacher(sample_events(), Some("t-999")).is_empty());
    assert_eq!(scope_to_teacher(sample_events(), None).len(), 4);
}

fn sample_references() -> References {
    References {
        teachers: parse_reference(SAMPLE_TEACHERS, "teachers").unwrap(),
        courses: parse_reference(SAMPLE_COURSES, "courses").unwrap(),
        classes: parse_reference(SAMPLE_CLASSES, "classes").unwrap(),
    }
}

#[test]
fn test_reference_names_fall_back_to_codes() {
    let refs = sample_references();
    assert_eq!(refs.teacher_name("t-100"), "Sara Ahmadi");
    assert_eq!(refs.teacher_name("t-200"), "t-200");
    assert_eq!(refs.course_name("c-math"), "Mathematics");
    assert_eq!(refs.course_name("c-art"), "c-art");
    // numeric class codes are compared as text
    assert_eq!(refs.class_name("101"), "Grade 10 A");
    assert_eq!(refs.class_name("102"), "102");

    let empty = References::default();
    assert_eq!(empty.teacher_name("t-100"), "t-100");

    let nameless = References {
        teachers: vec![Teacher {
            username: "t-1".to_string(),
            ..Teacher::default()
        }],
        ..References::default()
    };
    assert_eq!(nameless.teacher_name("t-1"), "t-1");
}

#[test]
fn test_event_details_resolve_codes() {
    let refs = sample_references();
    let events = sample_events();

    assert_eq!(
        refs.event_details(&events[0]),
        [
            "زنگ 08:00",
            "استاد: Sara Ahmadi",
            "درس: Mathematics",
            "کلاس: Grade 10 A"
        ]
    );
    assert_eq!(refs.event_details(&events[1]), ["استاد: t-200"]);
    assert!(refs.event_details(&events[3]).is_empty());
}

#[test]
fn test_invalid_reference_json_names_the_source() {
    let err = parse_reference::<Teacher>("{\"username\": 1}", "teachers.json").unwrap_err();
    assert!(matches!(err, AppError::InvalidReference(ref m) if m.starts_with("teachers.json")));
    assert!(parse_reference::<Teacher>(" ", "teachers.json").unwrap().is_empty());
}
