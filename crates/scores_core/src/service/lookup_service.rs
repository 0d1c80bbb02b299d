//! Student and discipline lookups with statistics.
//!
//! # Responsibility
//! - Select the lookup variant from a string discriminator.
//! - Filter the Score Store by exact key and summarize matching scores.
//!
//! # Invariants
//! - A key with zero matching rows yields `LookupOutcome::NotFound`; the
//!   statistics engine is only called with a non-empty score list.
//! - Scores are passed to the engine in storage order.

use crate::model::score::ScoreRecord;
use crate::repo::score_repo::ScoreRepository;
use crate::repo::RepoError;
use crate::stats::calculator::{calculate_stats, StatsError, StatsResult};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Discriminator value for student lookups.
pub const LOOKUP_KIND_STUDENT: &str = "student";
/// Discriminator value for discipline lookups.
pub const LOOKUP_KIND_DISCIPLINE: &str = "discipline";

/// Which Score Store column a lookup filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    /// Filter by `name`.
    Student,
    /// Filter by `discipline`.
    Discipline,
}

impl LookupKind {
    /// Resolves a handler discriminator (`student` or `discipline`).
    pub fn from_discriminator(value: &str) -> Result<Self, UnknownHandlerTypeError> {
        match value {
            LOOKUP_KIND_STUDENT => Ok(Self::Student),
            LOOKUP_KIND_DISCIPLINE => Ok(Self::Discipline),
            other => Err(UnknownHandlerTypeError(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => LOOKUP_KIND_STUDENT,
            Self::Discipline => LOOKUP_KIND_DISCIPLINE,
        }
    }

    /// Form field that carries the lookup key.
    pub fn form_field(self) -> &'static str {
        self.as_str()
    }

    /// User-facing message for a key without matching rows.
    pub fn not_found_message(self, key: &str) -> String {
        match self {
            Self::Student => format!("{key} - такого студента нет!"),
            Self::Discipline => format!("{key} - такой дисциплины нет!"),
        }
    }
}

impl FromStr for LookupKind {
    type Err = UnknownHandlerTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_discriminator(value)
    }
}

/// Handler discriminator that names no lookup variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHandlerTypeError(pub String);

impl Display for UnknownHandlerTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown request type `{}`; expected {LOOKUP_KIND_STUDENT}|{LOOKUP_KIND_DISCIPLINE}",
            self.0
        )
    }
}

impl Error for UnknownHandlerTypeError {}

/// Matching rows plus their statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupReport {
    pub kind: LookupKind,
    pub key: String,
    pub records: Vec<ScoreRecord>,
    pub stats: StatsResult,
}

/// Result of one lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(LookupReport),
    NotFound { key: String, message: String },
}

/// Lookup failure that is a fault, not an absent key.
#[derive(Debug)]
pub enum LookupError {
    Repo(RepoError),
    Stats(StatsError),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Stats(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Stats(err) => Some(err),
        }
    }
}

impl From<RepoError> for LookupError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<StatsError> for LookupError {
    fn from(value: StatsError) -> Self {
        Self::Stats(value)
    }
}

/// Lookup use-case service over the Score Store.
pub struct LookupService<R: ScoreRepository> {
    repo: R,
}

impl<R: ScoreRepository> LookupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Runs one exact-match lookup and summarizes the matching scores.
    ///
    /// # Errors
    /// - `LookupError::Repo` when the Score Store query fails.
    pub fn lookup(&self, kind: LookupKind, key: &str) -> Result<LookupOutcome, LookupError> {
        let records = match kind {
            LookupKind::Student => self.repo.find_by_name(key),
            LookupKind::Discipline => self.repo.find_by_discipline(key),
        }
        .map_err(|err| {
            error!(
                "event=lookup module=service kind={} status=error error={}",
                kind.as_str(),
                err
            );
            err
        })?;

        if records.is_empty() {
            info!(
                "event=lookup module=service kind={} status=not_found",
                kind.as_str()
            );
            return Ok(LookupOutcome::NotFound {
                key: key.to_string(),
                message: kind.not_found_message(key),
            });
        }

        let scores: Vec<u32> = records.iter().map(|record| record.score).collect();
        let stats = calculate_stats(&scores)?;
        info!(
            "event=lookup module=service kind={} status=found rows={}",
            kind.as_str(),
            records.len()
        );

        Ok(LookupOutcome::Found(LookupReport {
            kind,
            key: key.to_string(),
            records,
            stats,
        }))
    }
}
