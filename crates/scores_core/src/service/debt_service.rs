//! Academic debt listing and Debt Store synchronization.
//!
//! # Responsibility
//! - List current failing rows straight from the Score Store.
//! - Append missing failing `(name, discipline)` pairs to the Debt Store.
//!
//! # Invariants
//! - A score below `FAILING_SCORE_THRESHOLD` is failing; the threshold itself
//!   passes.
//! - Sync never updates or deletes debt rows. A stored debt keeps the score it
//!   was first recorded with, even after the Score Store changes.
//! - Sync is idempotent while the Score Store is unchanged.

use crate::model::score::{DebtRecord, NewScore, ScoreRecord};
use crate::repo::debt_repo::DebtRepository;
use crate::repo::score_repo::ScoreRepository;
use crate::repo::{RepoError, RepoResult};
use log::{debug, info};

/// Lowest passing score.
pub const FAILING_SCORE_THRESHOLD: u32 = 61;

/// Returns whether `score` counts as an academic debt.
pub fn is_failing(score: u32) -> bool {
    score < FAILING_SCORE_THRESHOLD
}

/// Counters from one `sync_debts` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebtSyncReport {
    /// Failing rows read from the Score Store.
    pub scanned: usize,
    /// Debt rows created by this run.
    pub inserted: usize,
    /// Failing rows whose pair was already in the Debt Store.
    pub already_recorded: usize,
    /// Inserts rejected by the unique key because a concurrent sync stored
    /// the pair between the existence check and the insert.
    pub duplicates_ignored: usize,
}

/// Debt use-case service over both stores.
pub struct DebtService<S: ScoreRepository, D: DebtRepository> {
    scores: S,
    debts: D,
}

impl<S: ScoreRepository, D: DebtRepository> DebtService<S, D> {
    pub fn new(scores: S, debts: D) -> Self {
        Self { scores, debts }
    }

    /// Returns failing Score Store rows in storage order.
    ///
    /// Does not read or write the Debt Store.
    pub fn list_debts(&self) -> RepoResult<Vec<ScoreRecord>> {
        self.scores.find_below(FAILING_SCORE_THRESHOLD)
    }

    /// Returns the materialized Debt Store rows.
    pub fn list_debt_records(&self) -> RepoResult<Vec<DebtRecord>> {
        self.debts.list_debt_records()
    }

    /// Inserts a debt row for every failing pair not yet recorded.
    pub fn sync_debts(&self) -> RepoResult<DebtSyncReport> {
        let failing = self.list_debts()?;
        let mut report = DebtSyncReport {
            scanned: failing.len(),
            ..DebtSyncReport::default()
        };

        for record in &failing {
            if self.debts.debt_exists(&record.name, &record.discipline)? {
                report.already_recorded += 1;
                continue;
            }

            match self.debts.insert_debt(&NewScore::from(record)) {
                Ok(_) => report.inserted += 1,
                Err(RepoError::DuplicateDebt { .. }) => {
                    debug!(
                        "event=debt_sync module=service status=duplicate_ignored score_id={}",
                        record.id
                    );
                    report.duplicates_ignored += 1;
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            "event=debt_sync module=service status=ok scanned={} inserted={} already_recorded={} duplicates_ignored={}",
            report.scanned, report.inserted, report.already_recorded, report.duplicates_ignored
        );
        Ok(report)
    }
}
