use serde::{Deserialize, Serialize};

/// A stored question/answer pair with category and keyword metadata.
///
/// This is the unit served by both the deterministic schedule lookup and the
/// general knowledge search. `keywords` is a comma-joined, unordered list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KnowledgeEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub keywords: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

/// The speaker of a single conversation turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the client-held conversation history, ordered oldest first.
///
/// History is ephemeral: it is passed into the pipeline per request and never
/// persisted by the core.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// The identity of the person asking, when the surrounding application has a
/// session for them. Schedule resolution requires the class code; general Q&A
/// does not.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Asker {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub class_code: String,
}

/// A transient question/answer pair extracted by the Smart Import LLM call,
/// validated (both fields non-empty) before becoming a [`KnowledgeEntry`].
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QaPair {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// An announcement as read from the portal's record store.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// A calendar event as read from the portal's record store.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub event_date: String,
}

/// A published schedule notice (class timetable, exam timetable, ...).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScheduleNotice {
    pub id: i64,
    pub title: String,
    pub schedule_type: String,
    pub description: String,
    pub date: String,
}
