//! Multi-database session manager for strata-db.
//!
//! An [`Engine`] owns at most one open [`Database`] at a time and knows
//! how to create, drop, and enter named databases under a data directory.
//! It is thin orchestration: statement execution stays in [`Database`],
//! file handling stays in [`crate::storage`].

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::sql::ast::EngineCommand;
use crate::sql::parser::Parser;
use crate::storage;
use crate::Database;

/// The session-level entry point: a data directory of `<name>.db` files
/// and the currently entered database, if any.
pub struct Engine {
    data_dir: PathBuf,
    current: Option<Database>,
}

impl Engine {
    /// Create a session over the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Engine {
            data_dir: data_dir.into(),
            current: None,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The currently entered database, if any.
    pub fn current(&self) -> Option<&Database> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Database> {
        self.current.as_mut()
    }

    fn database_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{name}.db"))
    }

    /// Create a named database and persist it immediately.
    pub fn create_database(&mut self, name: &str) -> Result<()> {
        let db = Database::new(name);
        storage::save(&db, &self.database_path(name))
    }

    /// Remove a named database's file. If it is the current database, the
    /// session leaves it first.
    pub fn drop_database(&mut self, name: &str) -> Result<()> {
        if self.current.as_ref().is_some_and(|db| db.name() == name) {
            self.current = None;
        }
        storage::delete(&self.database_path(name))
    }

    /// Load a named database from disk and make it current.
    pub fn enter_database(&mut self, name: &str) -> Result<()> {
        let db = storage::load(&self.database_path(name))?;
        self.current = Some(db);
        Ok(())
    }

    /// Persist the current database, if any.
    pub fn save_current(&self) -> Result<()> {
        match &self.current {
            Some(db) => storage::save(db, &self.database_path(db.name())),
            None => Ok(()),
        }
    }

    /// Parse and apply one engine-mode command line. Returns the parsed
    /// command so the caller can report what happened.
    pub fn run_command(&mut self, line: &str) -> Result<EngineCommand> {
        let command = Parser::parse_engine_command(line)?;
        match &command {
            EngineCommand::CreateDatabase(name) => self.create_database(name)?,
            EngineCommand::DropDatabase(name) => self.drop_database(name)?,
            EngineCommand::Enter(name) => self.enter_database(name)?,
        }
        Ok(command)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
