//! SQLite output backend (feature `sqlite`).
//!
//! Keeps the current batch in a `records` table inside `output.db` in the
//! configured directory.  Each save replaces the previous batch in a single
//! transaction, so readers see either the old batch or the new one.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};
use sink_core::{Clock, SinkError, SinkResult, SystemClock, Timestamp};
use tracing::{error, info};

use crate::saver::Saver;

/// Writes the batch to an SQLite database.
pub struct SqliteSaver<C: Clock = SystemClock> {
    conn:  Connection,
    path:  PathBuf,
    data:  Option<Vec<String>>,
    clock: C,
}

impl SqliteSaver<SystemClock> {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> SinkResult<Self> {
        let path = dir.join("output.db");
        let conn = Connection::open(&path)?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS records (
                 stamp    TEXT    NOT NULL,
                 position INTEGER NOT NULL,
                 line     TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, path, data: None, clock: SystemClock })
    }
}

impl<C: Clock> SqliteSaver<C> {
    pub fn with_clock<D: Clock>(self, clock: D) -> SqliteSaver<D> {
        SqliteSaver {
            conn:  self.conn,
            path:  self.path,
            data:  self.data,
            clock,
        }
    }

    /// Hold `lines` for the next save, replacing any previous batch.
    pub fn set_data<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = Some(lines.into_iter().map(Into::into).collect());
    }

    /// Lines of the stored batch, in batch order.
    pub fn stored_lines(&self) -> SinkResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT line FROM records ORDER BY position")?;
        let lines = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines)
    }

    /// Stamp of the stored batch, or `None` before the first save.
    pub fn stored_stamp(&self) -> SinkResult<Option<Timestamp>> {
        let stamp: Option<String> = self
            .conn
            .query_row("SELECT stamp FROM records LIMIT 1", [], |row| row.get(0))
            .optional()?;
        stamp.map(|s| Timestamp::parse(&s)).transpose()
    }

    fn replace_batch(&self, stamp: Timestamp, lines: &[String]) -> SinkResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM records", [])?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO records (stamp, position, line) VALUES (?1, ?2, ?3)",
            )?;
            let stamp = stamp.to_string();
            for (position, line) in lines.iter().enumerate() {
                stmt.execute(rusqlite::params![stamp, position as i64, line])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}

impl<C: Clock> Saver for SqliteSaver<C> {
    fn save(&mut self) -> SinkResult<PathBuf> {
        let stamp = self.clock.stamp();
        info!(path = %self.path.display(), %stamp, "Starting to write into database");

        let result = match self.data.as_deref() {
            None => Err(SinkError::NoBatch),
            Some(lines) => self.replace_batch(stamp, lines),
        };

        if let Err(e) = &result {
            error!(path = %self.path.display(), error = %e, "Unable to write scraped data into the database");
        }
        info!(path = %self.path.display(), ok = result.is_ok(), "Writing to database completed");

        result.map(|()| self.path.clone())
    }
}
