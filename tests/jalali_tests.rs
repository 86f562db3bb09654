mod common;
use common::ymd;
use ragenda::errors::AppError;
use ragenda::jalali::{JalaliDate, format_persian_date, is_leap_year, month_length};

fn j(y: i32, m: u32, d: u32) -> JalaliDate {
    JalaliDate { year: y, month: m, day: d }
}

#[test]
fn test_known_conversions() {
    let cases = [
        (ymd(2023, 9, 23), j(1402, 7, 1)),
        (ymd(2023, 3, 21), j(1402, 1, 1)),
        (ymd(2024, 3, 19), j(1402, 12, 29)),
        (ymd(2024, 3, 20), j(1403, 1, 1)),
        (ymd(2025, 3, 20), j(1403, 12, 30)),
        (ymd(2025, 3, 21), j(1404, 1, 1)),
        (ymd(2023, 9, 1), j(1402, 6, 10)),
        (ymd(1979, 2, 11), j(1357, 11, 22)),
        (ymd(2021, 3, 20), j(1399, 12, 30)),
    ];

    for (g, jd) in cases {
        assert_eq!(JalaliDate::from_gregorian(g).unwrap(), jd, "from {g}");
        assert_eq!(jd.to_gregorian().unwrap(), g, "to {jd}");
    }
}

#[test]
fn test_leap_years() {
    assert!(is_leap_year(1399).unwrap());
    assert!(is_leap_year(1403).unwrap());
    assert!(!is_leap_year(1400).unwrap());
    assert!(!is_leap_year(1402).unwrap());
    assert!(!is_leap_year(1404).unwrap());

    assert_eq!(month_length(1403, 12).unwrap(), 30);
    assert_eq!(month_length(1402, 12).unwrap(), 29);
    assert_eq!(month_length(1402, 6).unwrap(), 31);
    assert_eq!(month_length(1402, 7).unwrap(), 30);
    assert!(month_length(1402, 13).is_err());
}

#[test]
fn test_consecutive_gregorian_days_are_consecutive_jalali_days() {
    let mut prev = JalaliDate::from_gregorian(ymd(2019, 1, 1)).unwrap();
    for date in ymd(2019, 1, 2).iter_days().take(365 * 8) {
        let cur = JalaliDate::from_gregorian(date).unwrap();
        assert_eq!(cur.day_number().unwrap(), prev.day_number().unwrap() + 1);

        let len = month_length(prev.year, prev.month).unwrap();
        if prev.day == len {
            assert_eq!(cur.day, 1, "after {prev}");
        } else {
            assert_eq!((cur.year, cur.month, cur.day), (prev.year, prev.month, prev.day + 1));
        }
        prev = cur;
    }
}

#[test]
fn test_parse_accepts_any_digit_script() {
    assert_eq!(JalaliDate::parse("۱۴۰۲/۰۷/۰۱").unwrap(), j(1402, 7, 1));
    assert_eq!(JalaliDate::parse(" 1402/07/01 ").unwrap(), j(1402, 7, 1));
    assert_eq!("1403/12/30".parse::<JalaliDate>().unwrap(), j(1403, 12, 30));
}

#[test]
fn test_parse_rejects_bad_shape_and_ranges() {
    for bad in [
        "not-a-date",
        "1402-07-01",
        "1402/7/1",
        "1299/01/01",
        "1501/01/01",
        "1402/13/01",
        "1402/00/10",
        "1402/01/32",
        "1402/01/00",
    ] {
        assert!(
            matches!(JalaliDate::parse(bad), Err(AppError::InvalidDate(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_new_checks_real_month_length() {
    assert!(JalaliDate::new(1403, 12, 30).is_ok());
    assert!(JalaliDate::new(1402, 12, 30).is_err());
    assert!(JalaliDate::new(1402, 7, 31).is_err());
}

#[test]
fn test_format_and_titles() {
    assert_eq!(format_persian_date(ymd(2023, 9, 23)).unwrap(), "1402/07/01");
    assert_eq!(j(1402, 7, 1).month_name(), "مهر");
    assert_eq!(j(1402, 7, 1).month_title(), "مهر ۱۴۰۲");
    assert_eq!(j(1402, 7, 1).to_string(), "1402/07/01");
}

#[test]
fn test_out_of_range_year_errors() {
    assert!(matches!(
        j(3200, 1, 1).to_gregorian(),
        Err(AppError::JalaliRange(_))
    ));
    assert!(matches!(
        JalaliDate::from_gregorian(ymd(100, 1, 1)),
        Err(AppError::JalaliRange(_))
    ));
    assert!(is_leap_year(0).is_err());
}

#[test]
fn test_overlong_month_day_rolls_forward() {
    assert_eq!(
        j(1402, 7, 31).to_gregorian().unwrap(),
        j(1402, 8, 1).to_gregorian().unwrap()
    );
    assert_eq!(
        j(1402, 12, 30).day_number().unwrap(),
        j(1403, 1, 1).day_number().unwrap()
    );
}

#[test]
fn test_nowruz_dates_over_a_century() {
    // Farvardin 1 always lands between March 19 and March 22.
    for year in 1350..=1450 {
        let nowruz = j(year, 1, 1).to_gregorian().unwrap();
        assert_eq!(nowruz.format("%m").to_string(), "03", "{year}");
        let day: u32 = nowruz.format("%d").to_string().parse().unwrap();
        assert!((19..=22).contains(&day), "{year} -> {nowruz}");
        assert_eq!(JalaliDate::from_gregorian(nowruz).unwrap(), j(year, 1, 1));
    }
}
