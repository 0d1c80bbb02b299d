//! Route handlers over one SQLite connection.

use crate::page::request::Request;
use crate::page::route::Route;
use crate::page::view::{
    empty_page, lookup_page, not_found_page, records_page, Page, GET_INFO_TEMPLATE,
    INDEX_TEMPLATE, STUDENTS_WITH_DEBTS_TEMPLATE,
};
use crate::repo::debt_repo::SqliteDebtRepository;
use crate::repo::score_repo::SqliteScoreRepository;
use crate::repo::RepoError;
use crate::service::debt_service::DebtService;
use crate::service::lookup_service::{LookupError, LookupKind, LookupOutcome, LookupService};
use crate::service::score_service::ScoreService;
use log::debug;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Page handler failure. Absent lookup keys are pages, not errors.
#[derive(Debug)]
pub enum PageError {
    Repo(RepoError),
    Lookup(LookupError),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Lookup(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Lookup(err) => Some(err),
        }
    }
}

impl From<RepoError> for PageError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<LookupError> for PageError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

/// Page entry points bound to a migrated connection.
pub struct Pages<'conn> {
    conn: &'conn Connection,
}

impl<'conn> Pages<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Dispatches one request to the handler for `route`.
    pub fn handle(&self, route: Route, request: &Request) -> Result<Page, PageError> {
        debug!(
            "event=page_request module=page route={} method={:?}",
            route.name(),
            request.method
        );
        match route {
            Route::Index => self.index(),
            Route::GetInfo => Ok(empty_page(GET_INFO_TEMPLATE)),
            Route::StudentInfo => self.lookup(LookupKind::Student, request),
            Route::DisciplineInfo => self.lookup(LookupKind::Discipline, request),
            Route::StudentsWithDebts => self.students_with_debts(),
        }
    }

    fn index(&self) -> Result<Page, PageError> {
        let service = ScoreService::new(SqliteScoreRepository::try_new(self.conn)?);
        let students = service.list_scores()?;
        Ok(records_page(INDEX_TEMPLATE, &students))
    }

    fn lookup(&self, kind: LookupKind, request: &Request) -> Result<Page, PageError> {
        let key = request.lookup_key(kind.form_field());
        let service = LookupService::new(SqliteScoreRepository::try_new(self.conn)?);

        match service.lookup(kind, &key)? {
            LookupOutcome::Found(report) => Ok(lookup_page(&report)),
            LookupOutcome::NotFound { message, .. } => Ok(not_found_page(message)),
        }
    }

    fn students_with_debts(&self) -> Result<Page, PageError> {
        let service = DebtService::new(
            SqliteScoreRepository::try_new(self.conn)?,
            SqliteDebtRepository::try_new(self.conn)?,
        );
        service.sync_debts()?;
        let students = service.list_debts()?;
        Ok(records_page(STUDENTS_WITH_DEBTS_TEMPLATE, &students))
    }
}
