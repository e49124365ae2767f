//! # Weekday Resolver
//!
//! Maps free text to a canonical Thai day-of-week label. Explicit weekday
//! names always win over relative terms ("วันนี้", "พรุ่งนี้", "มะรืนนี้")
//! appearing in the same message.

use chrono::{Datelike, Duration, NaiveDate};

/// The seven canonical weekday labels, indexed Sunday-first to match
/// `chrono::Weekday::num_days_from_sunday`.
pub const THAI_WEEKDAYS: [&str; 7] = [
    "อาทิตย์",
    "จันทร์",
    "อังคาร",
    "พุธ",
    "พฤหัสบดี",
    "ศุกร์",
    "เสาร์",
];

/// Alternate spellings accepted for an explicit weekday mention.
/// Thursday is commonly shortened to "พฤหัส".
const WEEKDAY_ALIASES: [(&str, &str); 1] = [("พฤหัส", "พฤหัสบดี")];

/// Returns the Thai weekday label for a calendar date.
pub fn thai_weekday_of(date: NaiveDate) -> &'static str {
    THAI_WEEKDAYS[date.weekday().num_days_from_sunday() as usize]
}

/// Resolves a day reference in `message` to a canonical weekday label.
///
/// Checks, in order: the seven explicit weekday names (with or without the
/// leading "วัน" qualifier, aliases checked at their day's slot), then the
/// three recognized relative terms against `today`. Returns `None` when the
/// message carries no day reference.
pub fn resolve_weekday(message: &str, today: NaiveDate) -> Option<&'static str> {
    let normalized: String = message
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    for day in THAI_WEEKDAYS {
        if normalized.contains(&format!("วัน{day}")) || normalized.contains(day) {
            return Some(day);
        }
        // An alias counts as a mention of its day, at the same scan position.
        for (alias, target) in WEEKDAY_ALIASES {
            if target == day && normalized.contains(alias) {
                return Some(day);
            }
        }
    }

    if normalized.contains("วันนี้") {
        return Some(thai_weekday_of(today));
    }
    if normalized.contains("พรุ่งนี้") {
        return Some(thai_weekday_of(today + Duration::days(1)));
    }
    if normalized.contains("มะรืนนี้") {
        return Some(thai_weekday_of(today + Duration::days(2)));
    }

    None
}
