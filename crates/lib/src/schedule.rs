//! # Schedule Intent Resolver
//!
//! Detects schedule-related questions and answers them deterministically from
//! the knowledge base, before any LLM call. The search runs an ordered list
//! of queries, most specific first, and the first query with any results
//! wins; earlier, more specific queries are preferred even when a later query
//! would return a stronger match.

use crate::{
    providers::db::SqliteProvider,
    types::{Asker, KnowledgeEntry},
    weekday::{resolve_weekday, thai_weekday_of},
};
use chrono::NaiveDate;
use tracing::warn;

/// The cheap intent gate: any of these means the message is likely asking
/// about a timetable or exam schedule.
const SCHEDULE_INTENT_KEYWORDS: [&str; 4] = ["ตาราง", "เรียน", "คาบ", "schedule"];

const IDENTIFY_CLASS_MESSAGE: &str =
    "โปรดเข้าสู่ระบบเพื่อระบุห้องเรียนของคุณ แล้วถามเช่น 'ตารางเรียนวันนี้' ครับ";

/// Answers a schedule question deterministically, or returns `None` when the
/// message carries no schedule intent.
///
/// Every schedule-intent path terminates in a string: a schedule answer, a
/// prompt to identify the asker's class, or a fixed "not found" message.
/// Store errors during the query loop are logged and treated as empty results.
pub async fn answer_schedule_question(
    store: &SqliteProvider,
    message: &str,
    asker: Option<&Asker>,
    today: NaiveDate,
) -> Option<String> {
    let low = message.to_lowercase();
    if !SCHEDULE_INTENT_KEYWORDS.iter().any(|kw| low.contains(kw)) {
        return None;
    }

    let class_code = match asker {
        Some(asker) if !asker.class_code.trim().is_empty() => asker.class_code.as_str(),
        _ => return Some(IDENTIFY_CLASS_MESSAGE.to_string()),
    };

    let day = resolve_weekday(message, today).unwrap_or_else(|| thai_weekday_of(today));

    for query in build_search_queries(class_code, day) {
        let results = match store.search_knowledge(&query).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Schedule search failed for query '{query}': {e}");
                continue;
            }
        };
        if results.is_empty() {
            continue;
        }

        // Prefer an entry matching both the class token and the day token;
        // otherwise take the most recently updated result of this query.
        let chosen = results
            .iter()
            .find(|entry| matches_class_and_day(entry, class_code, day))
            .unwrap_or(&results[0]);
        return Some(format_schedule_answer(&chosen.answer, class_code, day));
    }

    Some(format!(
        "ยังไม่พบตารางของห้อง {class_code} สำหรับวัน{day} ในระบบครับ 📚\n\nกรุณาติดต่อครูประจำชั้นหรือเจ้าหน้าที่เพื่อสอบถามข้อมูลครับ"
    ))
}

/// Builds the prioritized query list, most specific first. Class codes like
/// "ม.1/1" also get a grade-only variant ("ม.1 วันจันทร์").
fn build_search_queries(class_code: &str, day: &str) -> Vec<String> {
    let mut queries = vec![
        format!("{class_code} วัน{day}"),
        format!("วัน{day} {class_code}"),
        format!("ตารางเรียน {class_code} วัน{day}"),
        format!("ตารางเรียน {class_code}"),
    ];
    if let Some((grade, _room)) = class_code.split_once('/') {
        queries.push(format!("{grade} วัน{day}"));
    }
    queries
}

fn matches_class_and_day(entry: &KnowledgeEntry, class_code: &str, day: &str) -> bool {
    let question = entry.question.to_lowercase();
    let answer = entry.answer.to_lowercase();
    let class = class_code.to_lowercase();
    let class_match = question.contains(&class) || answer.contains(&class);
    let day_match = question.contains(day) || answer.contains(day);
    class_match && day_match
}

/// Returns the stored answer as-is when it already carries the schedule icon
/// or a blank line; otherwise prepends a header naming the class and day.
fn format_schedule_answer(answer: &str, class_code: &str, day: &str) -> String {
    if answer.contains("📚") || answer.contains("\n\n") {
        return answer.to_string();
    }
    format!("📚 ตารางเรียนห้อง {class_code} วัน{day}\n\n{answer}")
}
