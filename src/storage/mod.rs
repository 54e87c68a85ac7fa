//! Persistence collaborator for strata-db.
//!
//! Serializes a whole [`Database`] — every table, column, and row — to a
//! single file and reads it back, round-tripping exactly. The core engine
//! never touches the filesystem; this module is the only place a database
//! meets a disk. The byte layout (JSON) is an implementation detail of
//! this collaborator.

use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{Result, StrataError};
use crate::Database;

/// Write the database to `path`, replacing previous contents.
///
/// If the path already exists it must hold a database with the same name;
/// anything else at that path is refused rather than clobbered.
pub fn save(db: &Database, path: &Path) -> Result<()> {
    if path.exists() {
        let existing = load(path).map_err(|_| {
            StrataError::CorruptDatabase(format!(
                "{} exists and could not be read as a database",
                path.display()
            ))
        })?;
        if existing.name() != db.name() {
            return Err(StrataError::CorruptDatabase(format!(
                "{} holds database '{}', not '{}'",
                path.display(),
                existing.name(),
                db.name()
            )));
        }
    }

    let file = fs::File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), db)
        .map_err(|e| StrataError::Serialization(e.to_string()))?;
    Ok(())
}

/// Read a database back from `path`.
pub fn load(path: &Path) -> Result<Database> {
    if !path.is_file() {
        return Err(StrataError::DatabaseNotFound(path.display().to_string()));
    }
    let file = fs::File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| StrataError::Serialization(e.to_string()))
}

/// Remove a database file.
pub fn delete(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(StrataError::DatabaseNotFound(path.display().to_string()));
    }
    fs::remove_file(path)?;
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
