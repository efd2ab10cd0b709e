//! SQLite-based storage for tasks and mood check-ins.
//!
//! Enums are stored as lowercase strings and parsed permissively on the way
//! out, so rows written by a newer version never break scheduling.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::error::DatabaseError;
use crate::mood::{EnergyLevel, MoodCheckin};
use crate::task::{CognitiveLoad, Priority, Task, TaskStatus};

/// Parse datetime from RFC3339 string with fallback to current time
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn parse_optional_datetime(dt_str: Option<String>) -> Option<DateTime<Utc>> {
    dt_str.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    })
}

/// Build a Task from a database row
fn row_to_task(row: &rusqlite::Row) -> Result<Task, rusqlite::Error> {
    let priority_str: String = row.get(3)?;
    let load_str: String = row.get(4)?;
    let status_str: String = row.get(6)?;
    let deadline: Option<String> = row.get(7)?;
    let scheduled_time: Option<String> = row.get(8)?;
    let created_at_str: String = row.get(9)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: Priority::parse(&priority_str),
        cognitive_load: CognitiveLoad::parse(&load_str),
        duration_minutes: row.get(5)?,
        status: TaskStatus::parse(&status_str),
        deadline: parse_optional_datetime(deadline),
        scheduled_time: parse_optional_datetime(scheduled_time),
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

/// Build a MoodCheckin from a database row
fn row_to_checkin(row: &rusqlite::Row) -> Result<MoodCheckin, rusqlite::Error> {
    let energy_str: String = row.get(2)?;
    let keywords_json: String = row.get(3)?;
    let created_at_str: String = row.get(5)?;

    Ok(MoodCheckin {
        id: row.get(0)?,
        mood_scale: row.get(1)?,
        energy_level: EnergyLevel::parse(&energy_str),
        emotion_keywords: serde_json::from_str(&keywords_json).unwrap_or_default(),
        notes: row.get(4)?,
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

const TASK_COLUMNS: &str =
    "id, title, description, priority, cognitive_load, duration_minutes, status, \
     deadline, scheduled_time, created_at";

const CHECKIN_COLUMNS: &str = "id, mood_scale, energy_level, emotion_keywords, notes, created_at";

/// SQLite database for tasks and mood check-ins.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/moodplan.db`.
    ///
    /// Creates tables if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, DatabaseError> {
        Self::open_at(data_dir()?.join("moodplan.db"))
    }

    /// Open the database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS tasks (
                id               TEXT PRIMARY KEY,
                title            TEXT NOT NULL,
                description      TEXT,
                priority         TEXT NOT NULL DEFAULT 'medium',
                cognitive_load   TEXT NOT NULL DEFAULT 'moderate',
                duration_minutes INTEGER NOT NULL DEFAULT 30,
                status           TEXT NOT NULL DEFAULT 'pending',
                deadline         TEXT,
                scheduled_time   TEXT,
                created_at       TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS mood_checkins (
                id               TEXT PRIMARY KEY,
                mood_scale       INTEGER NOT NULL,
                energy_level     TEXT NOT NULL DEFAULT 'medium',
                emotion_keywords TEXT NOT NULL DEFAULT '[]',
                notes            TEXT,
                created_at       TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS meta (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    // === Ownership ===

    /// Record `profile` as the database owner if none is set, then return the
    /// effective owner.
    pub fn claim_owner(&self, profile: &str) -> Result<String, DatabaseError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('owner', ?1)",
            params![profile],
        )?;
        let owner: String = self
            .conn
            .query_row("SELECT value FROM meta WHERE key = 'owner'", [], |row| {
                row.get(0)
            })?;
        Ok(owner)
    }

    /// The recorded owner profile, if any.
    pub fn owner(&self) -> Result<Option<String>, DatabaseError> {
        let owner = self
            .conn
            .query_row("SELECT value FROM meta WHERE key = 'owner'", [], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(owner)
    }

    // === Tasks ===

    pub fn insert_task(&self, task: &Task) -> Result<(), DatabaseError> {
        self.conn.execute(
            "INSERT INTO tasks (id, title, description, priority, cognitive_load, \
             duration_minutes, status, deadline, scheduled_time, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                task.id,
                task.title,
                task.description,
                task.priority.as_str(),
                task.cognitive_load.as_str(),
                task.duration_minutes,
                task.status.as_str(),
                task.deadline.map(|d| d.to_rfc3339()),
                task.scheduled_time.map(|d| d.to_rfc3339()),
                task.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_task(&self, id: &str) -> Result<Option<Task>, DatabaseError> {
        let task = self
            .conn
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    /// List tasks in creation order, optionally filtered by status.
    pub fn list_tasks(&self, status: Option<TaskStatus>) -> Result<Vec<Task>, DatabaseError> {
        let mut tasks = Vec::new();
        match status {
            Some(status) => {
                let mut stmt = self.conn.prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM tasks WHERE status = ?1 ORDER BY created_at ASC"
                ))?;
                let rows = stmt.query_map(params![status.as_str()], row_to_task)?;
                for row in rows {
                    tasks.push(row?);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(&format!(
                    "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at ASC"
                ))?;
                let rows = stmt.query_map([], row_to_task)?;
                for row in rows {
                    tasks.push(row?);
                }
            }
        }
        Ok(tasks)
    }

    /// Pending tasks in creation order: the scheduler's input set.
    pub fn pending_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        self.list_tasks(Some(TaskStatus::Pending))
    }

    pub fn set_task_status(&self, id: &str, status: TaskStatus) -> Result<(), DatabaseError> {
        let updated = self.conn.execute(
            "UPDATE tasks SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        if updated == 0 {
            return Err(DatabaseError::TaskNotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn delete_task(&self, id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(DatabaseError::TaskNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Write back the start time assigned by a scheduling run.
    pub fn update_scheduled_time(
        &self,
        id: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        let updated = self.conn.execute(
            "UPDATE tasks SET scheduled_time = ?1 WHERE id = ?2",
            params![at.to_rfc3339(), id],
        )?;
        if updated == 0 {
            return Err(DatabaseError::TaskNotFound(id.to_string()));
        }
        Ok(())
    }

    // === Mood check-ins ===

    pub fn insert_checkin(&self, checkin: &MoodCheckin) -> Result<(), DatabaseError> {
        let keywords = serde_json::to_string(&checkin.emotion_keywords)
            .unwrap_or_else(|_| "[]".to_string());
        self.conn.execute(
            "INSERT INTO mood_checkins (id, mood_scale, energy_level, emotion_keywords, \
             notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                checkin.id,
                checkin.mood_scale,
                checkin.energy_level.as_str(),
                keywords,
                checkin.notes,
                checkin.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// The most recent mood check-in, if any.
    pub fn latest_checkin(&self) -> Result<Option<MoodCheckin>, DatabaseError> {
        let checkin = self
            .conn
            .query_row(
                &format!(
                    "SELECT {CHECKIN_COLUMNS} FROM mood_checkins \
                     ORDER BY created_at DESC LIMIT 1"
                ),
                [],
                row_to_checkin,
            )
            .optional()?;
        Ok(checkin)
    }

    /// Recent check-ins, newest first.
    pub fn checkin_history(&self, limit: usize) -> Result<Vec<MoodCheckin>, DatabaseError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CHECKIN_COLUMNS} FROM mood_checkins ORDER BY created_at DESC LIMIT ?1"
        ))?;
        let rows = stmt.query_map(params![limit as i64], row_to_checkin)?;
        let mut checkins = Vec::new();
        for row in rows {
            checkins.push(row?);
        }
        Ok(checkins)
    }
}
