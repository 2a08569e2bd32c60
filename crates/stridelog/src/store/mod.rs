//! Storage layer for stridelog.
//!
//! This module provides `SQLite`-based persistent storage for walk records.
//! All records live under a fixed application namespace stamped into the
//! database metadata, so a database created by another tool is rejected
//! rather than silently mixed in.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::walk::{Mood, Walk};

/// The fixed namespace under which all records are stored.
pub const NAMESPACE: &str = "stridelog-data";

/// Metadata key holding the namespace stamp.
const NAMESPACE_KEY: &str = "namespace";

/// Date format used for the `date_walked` column.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Persistent store for walk records.
///
/// Provides create, find, save, and delete operations over a local `SQLite`
/// database, with listings ordered newest walk first.
#[derive(Debug)]
pub struct Store {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Store {
    /// Open or create a store database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// initializes the schema on a fresh database, and verifies the
    /// namespace stamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened, schema
    /// initialization fails, or the database belongs to another namespace.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;
        Self::check_namespace(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;
        Self::check_namespace(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Verify the namespace stamp, writing it on a fresh database.
    fn check_namespace(conn: &Connection) -> Result<()> {
        let existing: Option<String> = conn
            .query_row(
                "SELECT value FROM metadata WHERE key = ?1",
                [NAMESPACE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match existing {
            Some(found) if found != NAMESPACE => Err(Error::NamespaceMismatch {
                expected: NAMESPACE,
                found,
            }),
            Some(_) => Ok(()),
            None => {
                conn.execute(
                    "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
                    (NAMESPACE_KEY, NAMESPACE),
                )?;
                Ok(())
            }
        }
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a walk into storage and return the assigned ID.
    ///
    /// The walk's own `id` field is ignored; the store always assigns a
    /// fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn insert(&self, walk: &Walk) -> Result<i64> {
        let date = walk.date_walked.format(DATE_FORMAT).to_string();
        let mood = walk.mood.to_string();

        self.conn.execute(
            r"
            INSERT INTO walks (date_walked, distance_km, minutes_taken, mood)
            VALUES (?1, ?2, ?3, ?4)
            ",
            params![date, walk.distance_km, walk.minutes_taken, mood],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted walk with id {}", id);
        Ok(id)
    }

    /// Get a walk by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get(&self, id: i64) -> Result<Option<Walk>> {
        let result = self
            .conn
            .query_row(
                r"
                SELECT id, date_walked, distance_km, minutes_taken, mood
                FROM walks WHERE id = ?1
                ",
                [id],
                Self::row_to_walk,
            )
            .optional()?;
        Ok(result)
    }

    /// Get all walks, newest walk first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn all(&self) -> Result<Vec<Walk>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT id, date_walked, distance_km, minutes_taken, mood
            FROM walks ORDER BY date_walked DESC, id DESC
            ",
        )?;

        let walks = stmt
            .query_map([], Self::row_to_walk)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(walks)
    }

    /// Count total walks in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM walks", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete a walk by ID.
    ///
    /// Returns `true` if a walk was deleted, `false` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.conn.execute("DELETE FROM walks WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }

    /// Convert a database row to a Walk struct.
    fn row_to_walk(row: &rusqlite::Row) -> rusqlite::Result<Walk> {
        let id: i64 = row.get(0)?;
        let date_str: String = row.get(1)?;
        let distance_km: f64 = row.get(2)?;
        let minutes_taken: f64 = row.get(3)?;
        let mood_str: String = row.get(4)?;

        let date_walked = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).unwrap_or_else(|_| {
            warn!("Unparseable date_walked '{}', defaulting to epoch", date_str);
            NaiveDate::default()
        });

        // Mood::parse maps anything unrecognized to Unknown, matching the
        // display fallback for free-form mood values.
        let mood = Mood::parse(&mood_str);
        if mood == Mood::Unknown && mood_str != "unknown" {
            warn!("Unrecognized mood '{}', treating as unknown", mood_str);
        }

        Ok(Walk {
            id: Some(id),
            date_walked,
            distance_km,
            minutes_taken,
            mood,
        })
    }
}
