//! Database operations and SQLite management for stored plans.
//!
//! Each stored plan keeps its full JSON body next to a few summary columns
//! used for listing. A single-row `last_plan` table remembers the most
//! recently generated plan and when it was saved.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

mod migrations;
mod plan_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
