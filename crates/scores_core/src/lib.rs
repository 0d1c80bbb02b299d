//! Core domain logic for the students scores application.
//! Owns the score/debt storage, the statistics engine, the lookup and debt
//! use cases, and the page layer that packages them for rendering.

pub mod db;
pub mod logging;
pub mod model;
pub mod page;
pub mod repo;
pub mod service;
pub mod stats;

pub use logging::{default_log_level, init_logging, LoggingError};
pub use model::score::{
    DebtRecord, NewScore, RecordId, ScoreRecord, ScoreValidationError, MAX_TEXT_FIELD_CHARS,
};
pub use page::request::{Method, Request, MISSING_FORM_VALUE, NOT_A_POST_REQUEST};
pub use page::route::Route;
pub use page::view::Page;
pub use page::{PageError, Pages};
pub use repo::debt_repo::{DebtRepository, SqliteDebtRepository};
pub use repo::score_repo::{ScoreRepository, SqliteScoreRepository};
pub use repo::{RepoError, RepoResult};
pub use service::debt_service::{
    is_failing, DebtService, DebtSyncReport, FAILING_SCORE_THRESHOLD,
};
pub use service::lookup_service::{
    LookupError, LookupKind, LookupOutcome, LookupReport, LookupService, UnknownHandlerTypeError,
};
pub use service::score_service::ScoreService;
pub use stats::calculator::{calculate_stats, StatsError, StatsResult};
