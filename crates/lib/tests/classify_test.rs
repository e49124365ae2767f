use schoolchat::classify::{
    build_keywords, classify, detect_category, is_auto_category, GENERAL_CATEGORY,
};

#[test]
fn detects_schedule_time_category() {
    let result = classify("เข้าเรียน 8 โมง เลิกเรียน 16:30", "");
    assert_eq!(result.category, "เวลาเรียน");
    assert!(result.keywords.contains("เวลา"));
}

#[test]
fn time_keywords_win_over_later_groups() {
    // An event announcement that also mentions class times must classify as
    // เวลาเรียน because the time group is checked first.
    assert_eq!(
        detect_category("กิจกรรมกีฬาสี", "งดตารางเรียนช่วงบ่าย"),
        "เวลาเรียน"
    );
    // Without a time mention, the event group wins over dress code.
    assert_eq!(
        detect_category("งานชุมนุม", "กรุณาแต่งกายให้เรียบร้อย"),
        "กิจกรรม"
    );
}

#[test]
fn detects_contact_and_location() {
    assert_eq!(detect_category("เบอร์โทรโรงเรียน", "02-123-4567"), "ติดต่อ");
    assert_eq!(
        detect_category("ห้องสมุดอยู่ที่ไหน", "อาคาร 2 ชั้น 3"),
        "สถานที่"
    );
}

#[test]
fn defaults_to_general() {
    let result = classify("โรงเรียนก่อตั้งเมื่อไร", "พ.ศ. 2500");
    assert_eq!(result.category, GENERAL_CATEGORY);
    assert!(result.keywords.contains("โรงเรียน"));
}

#[test]
fn keywords_are_a_superset_of_the_category_seeds() {
    let keywords = build_keywords("เวลาเรียน", "เข้าเรียนกี่โมง", "8 โมงเช้า");
    for seed in ["เวลา", "เข้าเรียน", "เลิกเรียน", "ตาราง", "พักเที่ยง"] {
        assert!(keywords.contains(seed), "missing seed keyword: {seed}");
    }
    // No duplicate entries even though "เข้าเรียน" appears in the text.
    let count = keywords.split(", ").filter(|k| *k == "เข้าเรียน").count();
    assert_eq!(count, 1);
}

#[test]
fn auto_sentinels_request_classification() {
    assert!(is_auto_category(None));
    assert!(is_auto_category(Some("")));
    assert!(is_auto_category(Some("ทั่วไป")));
    assert!(is_auto_category(Some("อัตโนมัติ")));
    assert!(is_auto_category(Some("auto")));
    assert!(!is_auto_category(Some("เวลาเรียน")));
}
