//! # Context Assembler
//!
//! Gathers the latest announcements, events, schedule notices, and knowledge
//! entries into a single instruction-style text block given to the LLM as
//! grounding. Rendering is a pure function over an explicit snapshot, so it is
//! independently testable and concurrent requests never observe another
//! request's in-flight context. The text is rebuilt fresh per request and
//! never persisted.

use crate::{
    errors::ProviderError,
    prompts::{PERSONA_PREAMBLE, RESPONSE_GUIDANCE},
    providers::db::SqliteProvider,
    types::{Announcement, Asker, Event, KnowledgeEntry, ScheduleNotice},
};
use chrono::DateTime;

const ANNOUNCEMENT_CONTEXT_LIMIT: u32 = 5;
const EVENT_CONTEXT_LIMIT: u32 = 5;
const SCHEDULE_CONTEXT_LIMIT: u32 = 5;
const KNOWLEDGE_CONTEXT_LIMIT: usize = 10;

/// A point-in-time view of the live data the assistant grounds its answers on.
#[derive(Debug, Clone, Default)]
pub struct ContextSnapshot {
    pub announcements: Vec<Announcement>,
    pub events: Vec<Event>,
    pub schedules: Vec<ScheduleNotice>,
    pub knowledge: Vec<KnowledgeEntry>,
}

/// Reads the current snapshot from the record store.
pub async fn gather_snapshot(store: &SqliteProvider) -> Result<ContextSnapshot, ProviderError> {
    let announcements = store
        .list_recent_announcements(ANNOUNCEMENT_CONTEXT_LIMIT)
        .await?;
    let events = store.list_recent_events(EVENT_CONTEXT_LIMIT).await?;
    let schedules = store.list_recent_schedules(SCHEDULE_CONTEXT_LIMIT).await?;
    let mut knowledge = store.search_knowledge("").await?;
    knowledge.truncate(KNOWLEDGE_CONTEXT_LIMIT);

    Ok(ContextSnapshot {
        announcements,
        events,
        schedules,
        knowledge,
    })
}

/// Renders the system context: persona preamble, optional asker identity,
/// one bulleted section per data source, and fixed response guidance.
pub fn build_system_context(snapshot: &ContextSnapshot, asker: Option<&Asker>) -> String {
    let user_info = asker
        .map(|a| {
            format!(
                "ผู้ใช้ปัจจุบัน: {} {} ห้อง {}\n\n",
                a.first_name, a.last_name, a.class_code
            )
        })
        .unwrap_or_default();

    let mut context = format!("{PERSONA_PREAMBLE}\n\n{user_info}ข้อมูลสดจากระบบโรงเรียน:\n\n");

    if !snapshot.announcements.is_empty() {
        context.push_str("📢 ประกาศล่าสุด:\n");
        for a in &snapshot.announcements {
            context.push_str(&format!(
                "- {}: {} ({})\n",
                a.title,
                a.content,
                format_date(&a.created_at)
            ));
        }
        context.push('\n');
    }

    if !snapshot.events.is_empty() {
        context.push_str("📅 กิจกรรมที่จะถึง:\n");
        for e in &snapshot.events {
            context.push_str(&format!(
                "- {}: {} (วันที่: {})\n",
                e.title,
                e.description,
                format_date(&e.event_date)
            ));
        }
        context.push('\n');
    }

    if !snapshot.schedules.is_empty() {
        context.push_str("🗓️ ตารางล่าสุด:\n");
        for s in &snapshot.schedules {
            context.push_str(&format!(
                "- {} ({}): {} ({})\n",
                s.title,
                s.schedule_type,
                s.description,
                format_date(&s.date)
            ));
        }
        context.push('\n');
    }

    if !snapshot.knowledge.is_empty() {
        context.push_str("💡 ฐานความรู้โรงเรียน:\n");
        for k in &snapshot.knowledge {
            context.push_str(&format!("Q: {}\nA: {}\n\n", k.question, k.answer));
        }
    }

    context.push('\n');
    context.push_str(RESPONSE_GUIDANCE);
    context
}

/// Formats a stored timestamp as a short date, passing unparseable values
/// through unchanged.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = raw.parse::<chrono::NaiveDate>() {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}
