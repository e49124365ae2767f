//! # SQLite Schema and Queries
//!
//! Centralizes DDL and query strings for the record store, keeping the
//! provider logic clean and isolating database-specific syntax.

/// DDL for every table the assistant reads or writes. Each statement is
/// idempotent so the set can run on every startup.
pub const ALL_TABLE_CREATION_SQL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL DEFAULT '',
        last_name TEXT NOT NULL DEFAULT '',
        class_code TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS announcements (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        event_date TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS schedules (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        type TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        date TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS ai_knowledge (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        keywords TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT 'ทั่วไป',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
];

/// Substring search over the knowledge base, newest updates first.
///
/// Expects a single lowercased `%pattern%` parameter. The limit bounds the
/// downstream prompt-assembly cost.
pub fn search_knowledge(limit: u32) -> String {
    format!(
        "SELECT id, question, answer, keywords, category, created_at, updated_at
         FROM ai_knowledge
         WHERE LOWER(question) LIKE ?1 OR LOWER(answer) LIKE ?1 OR LOWER(keywords) LIKE ?1
         ORDER BY updated_at DESC, id DESC
         LIMIT {limit}"
    )
}
