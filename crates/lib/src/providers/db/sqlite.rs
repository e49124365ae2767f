//! # Record Store Provider
//!
//! A provider for the portal's local SQLite database using Turso. It exposes
//! the record-store verbs the pipeline needs: recent-first listings for the
//! read-only sources (announcements, events, schedule notices), substring
//! search over the knowledge base, and atomic single-row insert/update/delete
//! for knowledge entries. The core never issues raw SQL outside this module.

use crate::{
    errors::ProviderError,
    providers::db::sql,
    types::{Announcement, Asker, Event, KnowledgeEntry, ScheduleNotice},
};
use chrono::{SecondsFormat, Utc};
use std::fmt::{self, Debug};
use tracing::debug;
use turso::{params, Connection, Database, Row};

/// The hard cap on knowledge search results, bounding downstream prompt cost.
pub const KNOWLEDGE_SEARCH_LIMIT: u32 = 30;

/// A provider for interacting with the portal's SQLite database.
///
/// Holds a `Database` instance, which manages a connection pool. Cloning
/// shares the same underlying database, so concurrent requests observe a
/// single store.
#[derive(Clone)]
pub struct SqliteProvider {
    pub db: Database,
}

impl SqliteProvider {
    /// Creates a new `SqliteProvider` from a file path, or an isolated
    /// in-memory database when `db_path` is ":memory:".
    pub async fn new(db_path: &str) -> Result<Self, ProviderError> {
        let db = turso::Builder::new_local(db_path)
            .build()
            .await
            .map_err(|e| ProviderError::StorageConnection(e.to_string()))?;

        // WAL improves concurrency for file-based databases and is a no-op in
        // memory. PRAGMA returns a row, so `query` is required here.
        let conn = db
            .connect()
            .map_err(|e| ProviderError::StorageConnection(e.to_string()))?;
        conn.query("PRAGMA journal_mode=WAL;", ())
            .await
            .map_err(|e| ProviderError::StorageConnection(e.to_string()))?;

        Ok(Self { db })
    }

    /// Ensures all required tables exist. Idempotent, safe on every startup.
    pub async fn initialize_schema(&self) -> Result<(), ProviderError> {
        let conn = self.connect()?;
        for statement in sql::ALL_TABLE_CREATION_SQL {
            conn.execute(statement, ()).await?;
        }
        Ok(())
    }

    /// A helper for tests to pre-populate data with multiple SQL statements.
    pub async fn initialize_with_data(&self, init_sql: &str) -> Result<(), ProviderError> {
        let conn = self.connect()?;
        for statement in init_sql.split(';').filter(|s| !s.trim().is_empty()) {
            conn.execute(statement, ()).await?;
        }
        Ok(())
    }

    fn connect(&self) -> Result<Connection, ProviderError> {
        self.db
            .connect()
            .map_err(|e| ProviderError::StorageConnection(e.to_string()))
    }

    // --- Read-only sources ---

    /// Lists the most recent announcements, newest first.
    pub async fn list_recent_announcements(
        &self,
        limit: u32,
    ) -> Result<Vec<Announcement>, ProviderError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT id, title, content, created_at FROM announcements
                     ORDER BY created_at DESC, id DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(Announcement {
                id: row.get(0)?,
                title: row.get(1)?,
                content: row.get(2)?,
                created_at: row.get(3)?,
            });
        }
        Ok(out)
    }

    /// Lists the most recent calendar events, newest first.
    pub async fn list_recent_events(&self, limit: u32) -> Result<Vec<Event>, ProviderError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT id, title, description, event_date FROM events
                     ORDER BY event_date DESC, id DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(Event {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                event_date: row.get(3)?,
            });
        }
        Ok(out)
    }

    /// Lists the most recent schedule notices, newest first.
    pub async fn list_recent_schedules(
        &self,
        limit: u32,
    ) -> Result<Vec<ScheduleNotice>, ProviderError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT id, title, type, description, date FROM schedules
                     ORDER BY date DESC, id DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(ScheduleNotice {
                id: row.get(0)?,
                title: row.get(1)?,
                schedule_type: row.get(2)?,
                description: row.get(3)?,
                date: row.get(4)?,
            });
        }
        Ok(out)
    }

    /// Resolves a session user id to an asker identity.
    pub async fn get_asker(&self, user_id: i64) -> Result<Option<Asker>, ProviderError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                "SELECT id, first_name, last_name, class_code FROM users WHERE id = ?",
                params![user_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Asker {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                class_code: row.get(3)?,
            })),
            None => Ok(None),
        }
    }

    // --- Knowledge base ---

    /// Substring search over question, answer, and keywords, case-insensitive,
    /// most-recently-updated first, capped at [`KNOWLEDGE_SEARCH_LIMIT`].
    ///
    /// An empty query returns the most recently updated entries up to the cap;
    /// context assembly relies on that.
    pub async fn search_knowledge(
        &self,
        query: &str,
    ) -> Result<Vec<KnowledgeEntry>, ProviderError> {
        debug!(query = %query, "--> Searching knowledge base");
        let conn = self.connect()?;
        let pattern = format!("%{}%", query.to_lowercase());
        let mut stmt = conn
            .prepare(&sql::search_knowledge(KNOWLEDGE_SEARCH_LIMIT))
            .await?;
        let mut rows = stmt.query(params![pattern]).await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(knowledge_entry_from_row(&row)?);
        }
        Ok(out)
    }

    /// Lists every knowledge entry, most recently updated first.
    pub async fn list_all_knowledge(&self) -> Result<Vec<KnowledgeEntry>, ProviderError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                "SELECT id, question, answer, keywords, category, created_at, updated_at
                 FROM ai_knowledge ORDER BY updated_at DESC, id DESC",
                (),
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(knowledge_entry_from_row(&row)?);
        }
        Ok(out)
    }

    /// Inserts a knowledge entry as a single atomic row and returns it.
    pub async fn insert_knowledge(
        &self,
        question: &str,
        answer: &str,
        keywords: &str,
        category: &str,
    ) -> Result<KnowledgeEntry, ProviderError> {
        let conn = self.connect()?;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        conn.execute(
            "INSERT INTO ai_knowledge (question, answer, keywords, category, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![question, answer, keywords, category, now.clone(), now.clone()],
        )
        .await?;

        let mut rows = conn.query("SELECT last_insert_rowid()", ()).await?;
        let id: i64 = match rows.next().await? {
            Some(row) => row.get(0)?,
            None => {
                return Err(ProviderError::StorageOperationFailed(
                    "insert did not yield a row id".to_string(),
                ))
            }
        };

        Ok(KnowledgeEntry {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            keywords: keywords.to_string(),
            category: category.to_string(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Updates a knowledge entry in place, refreshing `updated_at`.
    pub async fn update_knowledge(
        &self,
        id: i64,
        question: &str,
        answer: &str,
        keywords: &str,
        category: &str,
    ) -> Result<(), ProviderError> {
        let conn = self.connect()?;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        conn.execute(
            "UPDATE ai_knowledge
             SET question = ?, answer = ?, keywords = ?, category = ?, updated_at = ?
             WHERE id = ?",
            params![question, answer, keywords, category, now, id],
        )
        .await?;
        Ok(())
    }

    /// Deletes a knowledge entry by id.
    pub async fn delete_knowledge(&self, id: i64) -> Result<(), ProviderError> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM ai_knowledge WHERE id = ?", params![id])
            .await?;
        Ok(())
    }
}

fn knowledge_entry_from_row(row: &Row) -> Result<KnowledgeEntry, ProviderError> {
    Ok(KnowledgeEntry {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        keywords: row.get(3)?,
        category: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

impl Debug for SqliteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProvider").finish_non_exhaustive()
    }
}

impl AsRef<Database> for SqliteProvider {
    fn as_ref(&self) -> &Database {
        &self.db
    }
}
