//! Sqlite-backed store of comment ids the bot has already handled.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use tracing::{debug, info, instrument};

use crate::base::{
    config::Config,
    types::{Res, Void},
};

/// Seen-comment store for concert-bot.
///
/// A single append-only `oldposts` table of comment ids. Rows are never
/// updated or deleted; once an id is inserted it is permanently "seen".
/// This is trivially cloneable and can be passed around without further
/// wrapping.
#[derive(Clone)]
pub struct SeenStore {
    conn: Arc<Mutex<Connection>>,
}

impl SeenStore {
    /// Open (or create) the database at the configured path.
    #[instrument(skip_all)]
    pub fn open(config: &Config) -> Res<Self> {
        let conn = Connection::open(&config.db_path)?;
        let store = Self::init(conn)?;

        info!("Seen-comment database ready at `{}`.", config.db_path);

        Ok(store)
    }

    /// Open an in-memory database. Used by tests.
    pub fn in_memory() -> Res<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Res<Self> {
        conn.execute("CREATE TABLE IF NOT EXISTS oldposts(ID TEXT)", [])?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Res<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| anyhow::anyhow!("seen store lock poisoned"))
    }

    /// True iff `id` was previously recorded with [`SeenStore::mark_seen`].
    pub fn has_seen(&self, id: &str) -> Res<bool> {
        let conn = self.lock()?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM oldposts WHERE ID = ?1", [id], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Record `id` as handled. Committed synchronously (autocommit), so the
    /// next cycle's `has_seen` observes it. Duplicate inserts are harmless;
    /// the table does not enforce uniqueness.
    pub fn mark_seen(&self, id: &str) -> Void {
        let conn = self.lock()?;

        conn.execute("INSERT INTO oldposts VALUES(?1)", [id])?;
        debug!("Marked `{}` as seen.", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_then_has_seen() {
        let store = SeenStore::in_memory().unwrap();

        assert!(!store.has_seen("t1_abc").unwrap());
        store.mark_seen("t1_abc").unwrap();
        assert!(store.has_seen("t1_abc").unwrap());

        // Still seen on later checks.
        assert!(store.has_seen("t1_abc").unwrap());
        assert!(!store.has_seen("t1_def").unwrap());
    }

    #[test]
    fn poisoned_lock_surfaces_as_error() {
        let store = SeenStore::in_memory().unwrap();

        let clone = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = clone.conn.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(store.has_seen("t1_abc").is_err());
        assert!(store.mark_seen("t1_abc").is_err());
    }

    #[test]
    fn duplicate_mark_is_harmless() {
        let store = SeenStore::in_memory().unwrap();

        store.mark_seen("t1_abc").unwrap();
        store.mark_seen("t1_abc").unwrap();

        assert!(store.has_seen("t1_abc").unwrap());
    }
}
