//! Route table with reverse lookup.

use crate::service::lookup_service::LookupKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Index,
    GetInfo,
    StudentInfo,
    DisciplineInfo,
    StudentsWithDebts,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Self::Index,
        Self::GetInfo,
        Self::StudentInfo,
        Self::DisciplineInfo,
        Self::StudentsWithDebts,
    ];

    /// Stable route name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::GetInfo => "get_info",
            Self::StudentInfo => "student_info",
            Self::DisciplineInfo => "discipline_info",
            Self::StudentsWithDebts => "students_with_debts",
        }
    }

    /// URL path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::GetInfo => "/get_info/",
            Self::StudentInfo => "/student_info/",
            Self::DisciplineInfo => "/discipline_info/",
            Self::StudentsWithDebts => "/students_with_debts/",
        }
    }

    /// Resolves an exact URL path.
    pub fn resolve(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Resolves a route name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.name() == name)
    }

    pub fn for_lookup(kind: LookupKind) -> Self {
        match kind {
            LookupKind::Student => Self::StudentInfo,
            LookupKind::Discipline => Self::DisciplineInfo,
        }
    }
}
