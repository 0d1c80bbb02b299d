//! Score Store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide exact-match filters by student name, discipline and score bound.
//! - Keep SQL for the `student` table inside the persistence boundary.

use super::{ensure_table, score_from_db, RepoResult};
use crate::model::score::{NewScore, RecordId, ScoreRecord};
use rusqlite::{params, Connection, Params, Row};

const SCORE_SELECT_SQL: &str = "SELECT
    id,
    name,
    discipline,
    score
FROM student";

/// Repository interface for the Score Store.
pub trait ScoreRepository {
    /// Inserts one validated row and returns its storage id.
    fn create_score(&self, score: &NewScore) -> RepoResult<RecordId>;
    /// Returns every row.
    fn list_scores(&self) -> RepoResult<Vec<ScoreRecord>>;
    /// Returns rows whose `name` equals `name` exactly.
    fn find_by_name(&self, name: &str) -> RepoResult<Vec<ScoreRecord>>;
    /// Returns rows whose `discipline` equals `discipline` exactly.
    fn find_by_discipline(&self, discipline: &str) -> RepoResult<Vec<ScoreRecord>>;
    /// Returns rows with `score < threshold`.
    fn find_below(&self, threshold: u32) -> RepoResult<Vec<ScoreRecord>>;
}

/// SQLite-backed Score Store.
pub struct SqliteScoreRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteScoreRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table(conn, "student")?;
        Ok(Self { conn })
    }

    fn query_scores<P: Params>(&self, filter: &str, params: P) -> RepoResult<Vec<ScoreRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SCORE_SELECT_SQL} {filter} ORDER BY id ASC;"))?;
        let mut rows = stmt.query(params)?;
        let mut scores = Vec::new();

        while let Some(row) = rows.next()? {
            scores.push(parse_score_row(row)?);
        }

        Ok(scores)
    }
}

impl ScoreRepository for SqliteScoreRepository<'_> {
    fn create_score(&self, score: &NewScore) -> RepoResult<RecordId> {
        score.validate()?;

        self.conn.execute(
            "INSERT INTO student (name, discipline, score) VALUES (?1, ?2, ?3);",
            params![score.name.as_str(), score.discipline.as_str(), score.score],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_scores(&self) -> RepoResult<Vec<ScoreRecord>> {
        self.query_scores("", [])
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Vec<ScoreRecord>> {
        self.query_scores("WHERE name = ?1", [name])
    }

    fn find_by_discipline(&self, discipline: &str) -> RepoResult<Vec<ScoreRecord>> {
        self.query_scores("WHERE discipline = ?1", [discipline])
    }

    fn find_below(&self, threshold: u32) -> RepoResult<Vec<ScoreRecord>> {
        self.query_scores("WHERE score < ?1", [threshold])
    }
}

fn parse_score_row(row: &Row<'_>) -> RepoResult<ScoreRecord> {
    Ok(ScoreRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        discipline: row.get("discipline")?,
        score: score_from_db(row.get("score")?, "student")?,
    })
}
