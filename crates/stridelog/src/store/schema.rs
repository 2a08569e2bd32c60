//! `SQLite` schema definitions for stridelog.
//!
//! This module contains the SQL statements for creating and managing
//! the database schema.

/// SQL statement to create the walks table.
pub const CREATE_WALKS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS walks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date_walked TEXT NOT NULL,
    distance_km REAL NOT NULL,
    minutes_taken REAL NOT NULL,
    mood TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)
";

/// SQL statement to create an index on `date_walked` for listing.
pub const CREATE_DATE_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_walks_date ON walks(date_walked DESC)
";

/// SQL statement to create an index on `mood` for summary queries.
pub const CREATE_MOOD_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_walks_mood ON walks(mood)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_WALKS_TABLE,
    CREATE_DATE_INDEX,
    CREATE_MOOD_INDEX,
    CREATE_METADATA_TABLE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements_not_empty() {
        assert!(!SCHEMA_STATEMENTS.is_empty());
        for stmt in SCHEMA_STATEMENTS {
            assert!(!stmt.is_empty());
        }
    }

    #[test]
    fn test_create_walks_table_contains_required_columns() {
        assert!(CREATE_WALKS_TABLE.contains("id INTEGER PRIMARY KEY"));
        assert!(CREATE_WALKS_TABLE.contains("date_walked TEXT NOT NULL"));
        assert!(CREATE_WALKS_TABLE.contains("distance_km REAL NOT NULL"));
        assert!(CREATE_WALKS_TABLE.contains("minutes_taken REAL NOT NULL"));
        assert!(CREATE_WALKS_TABLE.contains("mood TEXT NOT NULL"));
    }

    #[test]
    fn test_create_metadata_table_structure() {
        assert!(CREATE_METADATA_TABLE.contains("key TEXT PRIMARY KEY"));
        assert!(CREATE_METADATA_TABLE.contains("value TEXT NOT NULL"));
    }
}
