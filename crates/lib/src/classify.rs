//! # Knowledge Classifier
//!
//! Rule-based categorizer and keyword builder, applied whenever a knowledge
//! entry is created or updated without explicit metadata. The category rules
//! are an ordered list of (keyword group, label) pairs evaluated in sequence:
//! a text about an event that also mentions class times must classify as
//! เวลาเรียน, so the time group is checked first and contact last before the
//! default.

/// The default category, also used as a sentinel meaning "classify for me".
pub const GENERAL_CATEGORY: &str = "ทั่วไป";

/// Sentinel category values that request automatic classification.
pub const AUTO_SENTINELS: [&str; 3] = ["ทั่วไป", "อัตโนมัติ", "auto"];

/// Ordered category rules. First group with any member present wins.
const CATEGORY_RULES: [(&[&str], &str); 5] = [
    (
        &["เวลาเรียน", "เข้าเรียน", "เลิกเรียน", "ตารางเรียน", "schedule", "time"],
        "เวลาเรียน",
    ),
    (&["กิจกรรม", "ปฏิทิน", "event", "งาน", "ชุมนุม"], "กิจกรรม"),
    (&["แต่งกาย", "ระเบียบ", "เครื่องแบบ", "กฎ", "ข้อบังคับ"], "ระเบียบ"),
    (&["ติดต่อ", "โทร", "เบอร์", "อีเมล", "email", "facebook"], "ติดต่อ"),
    (
        &["ห้องสมุด", "library", "โรงอาหาร", "อาคาร", "ตำแหน่ง", "สถานที่"],
        "สถานที่",
    ),
];

/// Seed keyword lists per category. The stored keyword string is always a
/// superset of the category's seeds, which keeps substring-search recall
/// stable even when the author supplied no keywords.
const KEYWORD_SEEDS: [(&str, &[&str]); 6] = [
    ("เวลาเรียน", &["เวลา", "เข้าเรียน", "เลิกเรียน", "ตาราง", "พักเที่ยง"]),
    ("กิจกรรม", &["กิจกรรม", "ปฏิทิน", "งาน", "ชุมนุม", "แข่งขัน"]),
    ("ระเบียบ", &["ระเบียบ", "แต่งกาย", "เครื่องแบบ", "กฎ", "วินัย"]),
    ("ติดต่อ", &["ติดต่อ", "โทร", "เบอร์", "อีเมล", "facebook"]),
    ("สถานที่", &["ห้องสมุด", "โรงอาหาร", "อาคาร", "ห้อง", "ตำแหน่ง"]),
    ("ทั่วไป", &["ข้อมูล", "โรงเรียน", "ทั่วไป"]),
];

/// The result of classifying a question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub keywords: String,
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Detects the category of a question/answer pair against the ordered rules.
pub fn detect_category(question: &str, answer: &str) -> &'static str {
    let text = format!("{} {}", normalize(question), normalize(answer));
    for (members, label) in CATEGORY_RULES {
        if members.iter().any(|kw| text.contains(kw)) {
            return label;
        }
    }
    GENERAL_CATEGORY
}

/// Builds the comma-joined keyword string for a category: the category's seed
/// list, plus any seed actually found in the text, collapsed by set union in
/// seed order.
pub fn build_keywords(category: &str, question: &str, answer: &str) -> String {
    let seeds = KEYWORD_SEEDS
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, seeds)| *seeds)
        .unwrap_or(&[]);

    let text = format!("{} {}", normalize(question), normalize(answer));
    let mut keywords: Vec<&str> = seeds.to_vec();
    for kw in seeds {
        if text.contains(kw) && !keywords.contains(kw) {
            keywords.push(kw);
        }
    }
    keywords.join(", ")
}

/// Classifies a question/answer pair, producing a category and keyword string.
pub fn classify(question: &str, answer: &str) -> Classification {
    let category = detect_category(question, answer);
    Classification {
        category: category.to_string(),
        keywords: build_keywords(category, question, answer),
    }
}

/// Whether a caller-supplied category should be replaced by auto-detection.
pub fn is_auto_category(category: Option<&str>) -> bool {
    match category {
        Some(cat) => {
            let trimmed = cat.trim();
            trimmed.is_empty() || AUTO_SENTINELS.contains(&trimmed)
        }
        None => true,
    }
}
