//! # Fallback Responder
//!
//! Keyword-routed canned answers drawn from the same live data sources as the
//! context assembler, used when the chat-completion provider is unconfigured
//! or unusable. Every branch terminates in a string; store errors are logged
//! and fall through to the next branch.

use crate::{context::format_date, providers::db::SqliteProvider};
use chrono::NaiveDate;
use tracing::warn;

const FALLBACK_LIST_LIMIT: u32 = 3;

const GREETING_MESSAGE: &str = "สวัสดีครับ! 😊 ผมคือผู้ช่วย AI ของโรงเรียน\n\nคุณสามารถถามผมเกี่ยวกับ:\n• ประกาศและข่าวสาร\n• กิจกรรมโรงเรียน\n• ตารางเรียนและตารางสอบ\n• ข้อมูลทั่วไปของโรงเรียน\n\nลองถามคำถามของคุณได้เลยครับ!";

/// Produces a rule-based answer for `message`. Never fails.
pub async fn fallback_response(store: &SqliteProvider, message: &str, today: NaiveDate) -> String {
    let msg = message.to_lowercase();

    // Announcements / news
    if ["ประกาศ", "ข่าว", "แจ้ง"].iter().any(|kw| msg.contains(kw)) {
        match store.list_recent_announcements(FALLBACK_LIST_LIMIT).await {
            Ok(announcements) if !announcements.is_empty() => {
                let lines: Vec<String> = announcements
                    .iter()
                    .map(|a| {
                        let preview: String = a.content.chars().take(100).collect();
                        format!("• {}\n  {preview}...", a.title)
                    })
                    .collect();
                return format!("📢 ประกาศล่าสุด:\n\n{}", lines.join("\n\n"));
            }
            Ok(_) => return "ยังไม่มีประกาศใหม่ในขณะนี้ครับ".to_string(),
            Err(e) => warn!("Fallback announcement lookup failed: {e}"),
        }
    }

    // Events / calendar: the soonest upcoming ones. The listing is
    // newest-first, so the upcoming set must be re-sorted by date ascending
    // before taking the top of it.
    if ["กิจกรรม", "ปฏิทิน", "event"].iter().any(|kw| msg.contains(kw)) {
        match store.list_recent_events(FALLBACK_LIST_LIMIT * 10).await {
            Ok(events) => {
                let mut upcoming: Vec<_> = events
                    .iter()
                    .filter_map(|e| {
                        e.event_date
                            .get(..10)
                            .and_then(|d| d.parse::<NaiveDate>().ok())
                            .filter(|d| *d >= today)
                            .map(|d| (d, e))
                    })
                    .collect();
                if upcoming.is_empty() {
                    return "ยังไม่มีกิจกรรมที่จะถึงเร็วๆ นี้ครับ".to_string();
                }
                upcoming.sort_by_key(|(date, _)| *date);
                let lines: Vec<String> = upcoming
                    .iter()
                    .take(FALLBACK_LIST_LIMIT as usize)
                    .map(|(_, e)| format!("• {} — {}", e.title, format_date(&e.event_date)))
                    .collect();
                return format!("📅 กิจกรรมที่จะถึง:\n\n{}", lines.join("\n"));
            }
            Err(e) => warn!("Fallback event lookup failed: {e}"),
        }
    }

    // Schedules / exams
    if ["ตาราง", "schedule", "สอบ"].iter().any(|kw| msg.contains(kw)) {
        match store.list_recent_schedules(FALLBACK_LIST_LIMIT).await {
            Ok(schedules) if !schedules.is_empty() => {
                let lines: Vec<String> = schedules
                    .iter()
                    .map(|s| format!("• {} ({})", s.title, s.schedule_type))
                    .collect();
                return format!("🗓️ ตารางล่าสุด:\n\n{}", lines.join("\n"));
            }
            Ok(_) => return "ยังไม่พบตารางในระบบครับ".to_string(),
            Err(e) => warn!("Fallback schedule lookup failed: {e}"),
        }
    }

    // Direct knowledge-base hit on the raw message
    match store.search_knowledge(message).await {
        Ok(results) => {
            if let Some(top) = results.first() {
                return top.answer.clone();
            }
        }
        Err(e) => warn!("Fallback knowledge search failed: {e}"),
    }

    GREETING_MESSAGE.to_string()
}
