//! Score and debt records.
//!
//! # Invariants
//! - `name` and `discipline` are non-blank and at most
//!   `MAX_TEXT_FIELD_CHARS` characters.
//! - Records read back from storage carry their storage-assigned `id`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned row identifier.
pub type RecordId = i64;

/// Maximum length of `name` and `discipline`, counted in characters.
pub const MAX_TEXT_FIELD_CHARS: usize = 200;

/// One persisted exam result from the Score Store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: RecordId,
    pub name: String,
    pub discipline: String,
    pub score: u32,
}

/// One persisted row from the Debt Store.
///
/// Same shape as [`ScoreRecord`]; kept as a distinct type so debt rows cannot
/// be passed where score rows are expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtRecord {
    pub id: RecordId,
    pub name: String,
    pub discipline: String,
    pub score: u32,
}

impl DebtRecord {
    /// Returns the uniqueness key of this debt row.
    pub fn key(&self) -> (&str, &str) {
        (self.name.as_str(), self.discipline.as_str())
    }
}

/// Unsaved row used for inserts into either store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScore {
    pub name: String,
    pub discipline: String,
    pub score: u32,
}

impl NewScore {
    pub fn new(name: impl Into<String>, discipline: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            discipline: discipline.into(),
            score,
        }
    }

    /// Validates text field limits.
    ///
    /// Values are checked as given; no trimming is applied to the stored
    /// text, because lookups use exact matches.
    pub fn validate(&self) -> Result<(), ScoreValidationError> {
        if self.name.trim().is_empty() {
            return Err(ScoreValidationError::BlankName);
        }
        if self.discipline.trim().is_empty() {
            return Err(ScoreValidationError::BlankDiscipline);
        }

        let name_chars = self.name.chars().count();
        if name_chars > MAX_TEXT_FIELD_CHARS {
            return Err(ScoreValidationError::NameTooLong { chars: name_chars });
        }
        let discipline_chars = self.discipline.chars().count();
        if discipline_chars > MAX_TEXT_FIELD_CHARS {
            return Err(ScoreValidationError::DisciplineTooLong {
                chars: discipline_chars,
            });
        }

        Ok(())
    }
}

impl From<&ScoreRecord> for NewScore {
    fn from(value: &ScoreRecord) -> Self {
        Self::new(value.name.clone(), value.discipline.clone(), value.score)
    }
}

/// Validation failure for caller-provided rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreValidationError {
    BlankName,
    BlankDiscipline,
    NameTooLong { chars: usize },
    DisciplineTooLong { chars: usize },
}

impl Display for ScoreValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "student name must not be blank"),
            Self::BlankDiscipline => write!(f, "discipline must not be blank"),
            Self::NameTooLong { chars } => write!(
                f,
                "student name has {chars} characters, limit is {MAX_TEXT_FIELD_CHARS}"
            ),
            Self::DisciplineTooLong { chars } => write!(
                f,
                "discipline has {chars} characters, limit is {MAX_TEXT_FIELD_CHARS}"
            ),
        }
    }
}

impl Error for ScoreValidationError {}
