//! SQLite-backed sheet store.
//!
//! # Responsibility
//! - Open and bootstrap connections holding named sheets as text rows.
//! - Implement the row-level store contract over a `sheet_rows` table.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A store handle is only constructed over a fully migrated connection.
//! - Rows keep their insertion order through the `row_index` column.

use super::{StoreError, StoreResult, TabularStore};
use log::{error, info};
use rusqlite::{params, Connection};
use std::path::Path;
use std::time::{Duration, Instant};

const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = "CREATE TABLE sheet_rows (
    sheet TEXT NOT NULL,
    row_index INTEGER NOT NULL,
    c0 TEXT NOT NULL,
    c1 TEXT NOT NULL,
    c2 TEXT NOT NULL,
    c3 TEXT NOT NULL,
    c4 TEXT NOT NULL,
    c5 TEXT NOT NULL,
    PRIMARY KEY (sheet, row_index)
) WITHOUT ROWID;";

/// Opens a sheet database file and applies pending schema setup.
///
/// # Side effects
/// - Emits `store_open` log events with duration and status.
///
/// # Errors
/// A failure to open the file maps to `StoreError::Unavailable`, matching
/// how a missing or refused remote capability is reported.
pub fn open_sheet_db(path: impl AsRef<Path>) -> StoreResult<Connection> {
    let started_at = Instant::now();
    info!("event=store_open module=store status=start mode=file");

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(StoreError::Unavailable {
                reason: err.to_string(),
            });
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=store_open module=store status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=store status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory sheet database with the schema applied.
pub fn open_sheet_db_in_memory() -> StoreResult<Connection> {
    let mut conn = Connection::open_in_memory()?;
    bootstrap_connection(&mut conn)?;
    info!("event=store_open module=store status=ok mode=memory");
    Ok(conn)
}

fn bootstrap_connection(conn: &mut Connection) -> StoreResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;

    let current = current_user_version(conn)?;
    if current > SCHEMA_VERSION {
        return Err(StoreError::UninitializedStore {
            expected_version: SCHEMA_VERSION,
            actual_version: current,
        });
    }
    if current < SCHEMA_VERSION {
        let tx = conn.transaction()?;
        tx.execute_batch(SCHEMA_SQL)?;
        tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
        tx.commit()?;
    }
    Ok(())
}

fn current_user_version(conn: &Connection) -> StoreResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Sheet store persisting rows in a bootstrapped SQLite connection.
pub struct SqliteSheetStore<'conn> {
    conn: &'conn Connection,
    sheet: String,
}

impl<'conn> SqliteSheetStore<'conn> {
    /// Wraps a connection, verifying it was bootstrapped by
    /// [`open_sheet_db`] / [`open_sheet_db_in_memory`] first.
    pub fn try_new(conn: &'conn Connection, sheet: impl Into<String>) -> StoreResult<Self> {
        let actual_version = current_user_version(conn)?;
        if actual_version != SCHEMA_VERSION {
            return Err(StoreError::UninitializedStore {
                expected_version: SCHEMA_VERSION,
                actual_version,
            });
        }
        Ok(Self {
            conn,
            sheet: sheet.into(),
        })
    }

    fn next_row_index(&self) -> StoreResult<i64> {
        let next = self.conn.query_row(
            "SELECT COALESCE(MAX(row_index) + 1, 0) FROM sheet_rows WHERE sheet = ?1;",
            [self.sheet.as_str()],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(next)
    }
}

impl TabularStore for SqliteSheetStore<'_> {
    fn sheet_name(&self) -> &str {
        &self.sheet
    }

    fn read_all(&self) -> StoreResult<Vec<Vec<String>>> {
        let mut stmt = self.conn.prepare(
            "SELECT c0, c1, c2, c3, c4, c5
             FROM sheet_rows
             WHERE sheet = ?1
             ORDER BY row_index ASC;",
        )?;

        let mut rows = stmt.query([self.sheet.as_str()])?;
        let mut all = Vec::new();
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(6);
            for column in 0..6 {
                cells.push(row.get::<_, String>(column)?);
            }
            all.push(cells);
        }
        Ok(all)
    }

    fn clear(&self) -> StoreResult<()> {
        self.conn.execute(
            "DELETE FROM sheet_rows WHERE sheet = ?1;",
            [self.sheet.as_str()],
        )?;
        Ok(())
    }

    fn write_rows(&self, rows: &[Vec<String>]) -> StoreResult<()> {
        let mut index = self.next_row_index()?;
        let mut stmt = self.conn.prepare(
            "INSERT INTO sheet_rows (sheet, row_index, c0, c1, c2, c3, c4, c5)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
        )?;

        for row in rows {
            // Short rows are padded so the table shape stays fixed; the
            // repository layer never emits them.
            let cell = |column: usize| row.get(column).map(String::as_str).unwrap_or("");
            stmt.execute(params![
                self.sheet.as_str(),
                index,
                cell(0),
                cell(1),
                cell(2),
                cell(3),
                cell(4),
                cell(5),
            ])?;
            index += 1;
        }
        Ok(())
    }
}
