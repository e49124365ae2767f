use chrono::NaiveDate;
use schoolchat::weekday::{resolve_weekday, thai_weekday_of};

// 2025-01-06 is a Monday.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

#[test]
fn maps_dates_to_thai_labels() {
    assert_eq!(thai_weekday_of(monday()), "จันทร์");
    assert_eq!(
        thai_weekday_of(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()),
        "อาทิตย์"
    );
    assert_eq!(
        thai_weekday_of(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()),
        "เสาร์"
    );
}

#[test]
fn resolves_explicit_weekday_names() {
    assert_eq!(resolve_weekday("ตารางเรียนวันอังคาร", monday()), Some("อังคาร"));
    assert_eq!(resolve_weekday("ศุกร์ เรียนอะไรบ้าง", monday()), Some("ศุกร์"));
    // Short form of Thursday.
    assert_eq!(resolve_weekday("วันพฤหัส มีคาบไหม", monday()), Some("พฤหัสบดี"));
}

#[test]
fn thursday_short_form_keeps_its_scan_position() {
    // พฤหัส sits at the Thursday slot of the ordered scan, so it beats a
    // later-ordered full name appearing in the same message.
    assert_eq!(resolve_weekday("พฤหัสหรือศุกร์ดี", monday()), Some("พฤหัสบดี"));
}

#[test]
fn explicit_weekday_wins_over_relative_terms() {
    // "พรุ่งนี้" from a Monday would be อังคาร, but the explicit mention of
    // เสาร์ must take precedence regardless of position in the string.
    assert_eq!(
        resolve_weekday("พรุ่งนี้หรือวันเสาร์ดี", monday()),
        Some("เสาร์")
    );
}

#[test]
fn resolves_relative_terms_against_today() {
    assert_eq!(resolve_weekday("ตารางเรียนวันนี้", monday()), Some("จันทร์"));
    assert_eq!(resolve_weekday("พรุ่งนี้เรียนอะไร", monday()), Some("อังคาร"));
    assert_eq!(resolve_weekday("มะรืนนี้มีสอบไหม", monday()), Some("พุธ"));
}

#[test]
fn ignores_whitespace_and_case() {
    assert_eq!(resolve_weekday("  วัน  จันทร์ ", monday()), Some("จันทร์"));
    assert_eq!(resolve_weekday("SCHEDULE วันนี้", monday()), Some("จันทร์"));
}

#[test]
fn returns_none_without_a_day_reference() {
    assert_eq!(resolve_weekday("ห้องสมุดเปิดกี่โมง", monday()), None);
    assert_eq!(resolve_weekday("", monday()), None);
}
