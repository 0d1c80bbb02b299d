//! Render payloads handed to the template layer.

use crate::model::score::ScoreRecord;
use crate::page::route::Route;
use crate::service::lookup_service::{LookupKind, LookupReport};
use serde_json::{json, Map, Value};

pub const INDEX_TEMPLATE: &str = "students_scores/index.html";
pub const GET_INFO_TEMPLATE: &str = "students_scores/get_info.html";
pub const STUDENT_FORM_TEMPLATE: &str = "students_scores/student_form.html";
pub const DISCIPLINE_FORM_TEMPLATE: &str = "students_scores/discipline_form.html";
pub const STUDENTS_WITH_DEBTS_TEMPLATE: &str = "students_scores/students_with_debts.html";

const BACK_LINK_TEXT: &str = "Вернуться назад";

/// Output of one page handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// Template name plus a JSON object of named values.
    Rendered {
        template: &'static str,
        context: Value,
    },
    /// Inline message with a link back to `link`.
    ErrorFragment { message: String, link: &'static str },
}

impl Page {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::ErrorFragment { .. })
    }

    pub fn template(&self) -> Option<&'static str> {
        match self {
            Self::Rendered { template, .. } => Some(*template),
            Self::ErrorFragment { .. } => None,
        }
    }

    pub fn context(&self) -> Option<&Value> {
        match self {
            Self::Rendered { context, .. } => Some(context),
            Self::ErrorFragment { .. } => None,
        }
    }

    /// HTML body for error fragments.
    pub fn error_html(&self) -> Option<String> {
        match self {
            Self::ErrorFragment { message, link } => Some(render_error_fragment(message, link)),
            Self::Rendered { .. } => None,
        }
    }
}

pub(crate) fn records_page(template: &'static str, records: &[ScoreRecord]) -> Page {
    Page::Rendered {
        template,
        context: json!({ "students": records }),
    }
}

pub(crate) fn empty_page(template: &'static str) -> Page {
    Page::Rendered {
        template,
        context: Value::Object(Map::new()),
    }
}

pub(crate) fn lookup_page(report: &LookupReport) -> Page {
    let (template, records_key, key_key, stats_key) = match report.kind {
        LookupKind::Student => (
            STUDENT_FORM_TEMPLATE,
            "student_info",
            "student_name",
            "stud_stats",
        ),
        LookupKind::Discipline => (
            DISCIPLINE_FORM_TEMPLATE,
            "discipline_info",
            "discipline_name",
            "disc_stats",
        ),
    };

    let mut context = Map::new();
    context.insert(records_key.to_string(), json!(report.records));
    context.insert(key_key.to_string(), json!(report.key));
    context.insert(stats_key.to_string(), json!(report.stats));

    Page::Rendered {
        template,
        context: Value::Object(context),
    }
}

pub(crate) fn not_found_page(message: String) -> Page {
    Page::ErrorFragment {
        message,
        link: Route::GetInfo.path(),
    }
}

/// Formats an inline error message followed by a return link.
pub fn render_error_fragment(message: &str, link: &str) -> String {
    format!(
        "<h3>{}</h3><br><a href=\"{}\">{BACK_LINK_TEXT}</a>",
        html_escape::encode_text(message),
        html_escape::encode_double_quoted_attribute(link)
    )
}
