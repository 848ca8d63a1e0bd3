//! Database connection management.
//!
//! The [`Database`] handle is opened and closed by its owner; nothing in
//! the crate keeps a process-wide connection.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// A database connection wrapper with configuration.
///
/// # Examples
///
/// ```no_run
/// use booking::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/booking.db")).unwrap();
/// db.close().unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode for concurrent access
    /// - Configure busy timeout
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the parent directory
    /// cannot be created, PRAGMA settings fail, or the schema is
    /// incompatible.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        Self::configure(conn, config)
    }

    /// Opens a private in-memory database with the schema initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema setup fails.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(conn, DatabaseConfig::new(":memory:"))
    }

    fn configure(conn: Connection, config: DatabaseConfig) -> Result<Self> {
        // PRAGMA journal_mode returns a row, so it goes through query_row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.busy_timeout(config.busy_timeout)?;

        super::migrations::check_schema_compatibility(&conn)?;

        log::debug!("opened reservation database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Closes the connection, reporting any failure to flush or release it.
    ///
    /// # Errors
    ///
    /// Returns the error SQLite reported while closing.
    pub fn close(self) -> Result<()> {
        let path = self.config.path;
        self.conn.close().map_err(|(_, e)| e)?;
        log::debug!("closed reservation database at {}", path.display());
        Ok(())
    }

    /// Returns the configuration this handle was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");
        db.close().unwrap();
    }

    #[test]
    fn test_database_auto_create_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("test.db");

        assert!(!path.parent().unwrap().exists());
        let _db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_database_read_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        Database::open(DatabaseConfig::new(&path))
            .unwrap()
            .close()
            .unwrap();

        let db = Database::open(DatabaseConfig::new(&path).read_only()).unwrap();
        let result = db.connection().execute("CREATE TABLE test (id INTEGER)", []);
        assert!(result.is_err());
        assert!(db.config().read_only);
    }

    #[test]
    fn test_open_missing_without_auto_create_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.db");
        let mut config = DatabaseConfig::new(&path);
        config.auto_create = false;

        assert!(Database::open(config).is_err());
    }

    #[test]
    fn test_open_in_memory_has_schema() {
        let db = Database::open_in_memory().unwrap();
        let count: i32 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
