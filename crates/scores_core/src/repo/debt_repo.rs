//! Debt Store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Insert debt rows with a uniqueness guarantee per `(name, discipline)`.
//! - Expose read access to the materialized debt list.
//!
//! # Invariants
//! - The store is append-only: no update or delete paths exist.
//! - A unique-key rejection is reported as `RepoError::DuplicateDebt`.

use super::{ensure_table, score_from_db, RepoError, RepoResult};
use crate::model::score::{DebtRecord, NewScore, RecordId};
use rusqlite::{ffi, params, Connection, ErrorCode, Row};

/// Repository interface for the Debt Store.
pub trait DebtRepository {
    /// Returns whether a debt row exists for `(name, discipline)`.
    fn debt_exists(&self, name: &str, discipline: &str) -> RepoResult<bool>;
    /// Inserts one debt row copied from the Score Store.
    ///
    /// Field limits are not re-checked; the row is stored as loaded.
    /// Fails with `RepoError::DuplicateDebt` when the pair is already stored.
    fn insert_debt(&self, debt: &NewScore) -> RepoResult<RecordId>;
    /// Returns every debt row in storage order.
    fn list_debt_records(&self) -> RepoResult<Vec<DebtRecord>>;
}

/// SQLite-backed Debt Store.
pub struct SqliteDebtRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDebtRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "student_with_debts")?;
        Ok(Self { conn })
    }
}

impl DebtRepository for SqliteDebtRepository<'_> {
    fn debt_exists(&self, name: &str, discipline: &str) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM student_with_debts
                WHERE name = ?1 AND discipline = ?2
            );",
            params![name, discipline],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn insert_debt(&self, debt: &NewScore) -> RepoResult<RecordId> {
        let inserted = self.conn.execute(
            "INSERT INTO student_with_debts (name, discipline, score) VALUES (?1, ?2, ?3);",
            params![debt.name.as_str(), debt.discipline.as_str(), debt.score],
        );

        match inserted {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(err) if is_unique_violation(&err) => Err(RepoError::DuplicateDebt {
                name: debt.name.clone(),
                discipline: debt.discipline.clone(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn list_debt_records(&self) -> RepoResult<Vec<DebtRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, discipline, score
             FROM student_with_debts
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut debts = Vec::new();

        while let Some(row) = rows.next()? {
            debts.push(parse_debt_row(row)?);
        }

        Ok(debts)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.code == ErrorCode::ConstraintViolation
                && inner.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn parse_debt_row(row: &Row<'_>) -> RepoResult<DebtRecord> {
    Ok(DebtRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        discipline: row.get("discipline")?,
        score: score_from_db(row.get("score")?, "student_with_debts")?,
    })
}
