//! Stored preferences, backed by a SQLite key-value table.
//!
//! Only preferences live here (keypad mode, display width). Calculations
//! are never written to disk.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use tracing::{debug, warn};

use crate::consts::{DEFAULT_SCREEN_WIDTH, MIN_SCREEN_WIDTH};
use crate::keypad::Mode;

const MODE_KEY: &str = "mode";
const WIDTH_KEY: &str = "width";

/// Persistent key-value configuration store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table in the given database.
    /// Use `":memory:"` for tests and ephemeral sessions.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open config database at {path}"))?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        debug!(path, "config opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("config connection lock poisoned"))
    }

    /// Get a raw value by key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT value FROM config WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Set a raw value (upsert).
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )
        .with_context(|| format!("failed to store {key}"))?;
        Ok(())
    }

    /// Remove a key.
    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM config WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Keypad mode to start in. Unreadable values fall back to basic.
    pub fn mode(&self) -> Result<Mode> {
        match self.get(MODE_KEY)? {
            Some(raw) => Ok(raw.parse().unwrap_or_else(|err| {
                warn!(%err, "ignoring stored mode");
                Mode::default()
            })),
            None => Ok(Mode::default()),
        }
    }

    pub fn set_mode(&self, mode: Mode) -> Result<()> {
        self.set(MODE_KEY, &mode.to_string())
    }

    /// Display width in columns, never below the minimum.
    pub fn width(&self) -> Result<usize> {
        let width = match self.get(WIDTH_KEY)? {
            Some(raw) => raw.trim().parse().unwrap_or_else(|err| {
                warn!(%err, raw, "ignoring stored width");
                DEFAULT_SCREEN_WIDTH
            }),
            None => DEFAULT_SCREEN_WIDTH,
        };
        Ok(width.max(MIN_SCREEN_WIDTH))
    }

    pub fn set_width(&self, width: usize) -> Result<()> {
        self.set(WIDTH_KEY, &width.max(MIN_SCREEN_WIDTH).to_string())
    }
}
