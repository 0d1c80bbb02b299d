//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define exact-match lookup contracts over the Score Store.
//! - Define append-only insert contracts over the Debt Store.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Write paths call `NewScore::validate()` before SQL mutations.
//! - Duplicate debt inserts surface as `RepoError::DuplicateDebt`, never as a
//!   raw SQLite error.
//! - Read paths return rows in storage order (`id ASC`).

pub mod debt_repo;
pub mod score_repo;

use crate::db::DbError;
use crate::model::score::ScoreValidationError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for score and debt persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(ScoreValidationError),
    Db(DbError),
    /// Debt Store already holds a row for this `(name, discipline)`.
    DuplicateDebt {
        name: String,
        discipline: String,
    },
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateDebt { name, discipline } => {
                write!(f, "debt already recorded for `{name}` in `{discipline}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted score data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateDebt { .. } | Self::InvalidData(_) | Self::MissingRequiredTable(_) => {
                None
            }
        }
    }
}

impl From<ScoreValidationError> for RepoError {
    fn from(value: ScoreValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn ensure_table(conn: &Connection, table: &'static str) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if exists == 1 {
        Ok(())
    } else {
        Err(RepoError::MissingRequiredTable(table))
    }
}

pub(crate) fn score_from_db(value: i64, table: &str) -> RepoResult<u32> {
    u32::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid score `{value}` in {table}.score")))
}
