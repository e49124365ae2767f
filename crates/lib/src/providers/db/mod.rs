pub mod sql;
pub mod sqlite;

pub use sqlite::SqliteProvider;
