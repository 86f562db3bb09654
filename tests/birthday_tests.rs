use ragenda::core::calculator::birthday::{age, days_until_birthday};
use ragenda::jalali::JalaliDate;

fn p(s: &str) -> JalaliDate {
    JalaliDate::parse(s).unwrap()
}

#[test]
fn test_birthday_later_this_year() {
    let birth = p("1380/07/05");
    let today = p("1402/07/01");
    assert_eq!(days_until_birthday(&birth, &today).unwrap(), 4);
    assert_eq!(age(&birth, &today), 21);
}

#[test]
fn test_birthday_today() {
    let birth = p("1380/07/01");
    let today = p("1402/07/01");
    assert_eq!(days_until_birthday(&birth, &today).unwrap(), 0);
    assert_eq!(age(&birth, &today), 22);
}

#[test]
fn test_birthday_already_passed_rolls_to_next_year() {
    let birth = p("1380/06/31");
    let today = p("1402/07/01");
    assert_eq!(days_until_birthday(&birth, &today).unwrap(), 364);
    assert_eq!(age(&birth, &today), 22);
}

#[test]
fn test_esfand_30_in_common_and_leap_years() {
    let birth = p("1399/12/30");
    // 1402 is a common year: celebrated on Esfand 29
    assert_eq!(days_until_birthday(&birth, &p("1402/12/01")).unwrap(), 28);
    // 1403 is leap
    assert_eq!(days_until_birthday(&birth, &p("1403/12/01")).unwrap(), 29);
}

#[test]
fn test_age_never_negative() {
    assert_eq!(age(&p("1405/01/01"), &p("1402/07/01")), 0);
}
