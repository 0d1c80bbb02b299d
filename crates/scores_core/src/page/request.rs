//! Minimal inbound request model.

use std::collections::BTreeMap;

/// Lookup key used when the request is not a form submission.
pub const NOT_A_POST_REQUEST: &str = "not a POST request";
/// Lookup key used when a POST lacks the expected field.
pub const MISSING_FORM_VALUE: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Method plus decoded form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub form: BTreeMap<String, String>,
}

impl Request {
    pub fn get() -> Self {
        Self {
            method: Method::Get,
            form: BTreeMap::new(),
        }
    }

    pub fn post<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            method: Method::Post,
            form: fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn form_value(&self, field: &str) -> Option<&str> {
        self.form.get(field).map(String::as_str)
    }

    /// Returns the lookup key carried by `field`.
    ///
    /// Non-POST requests yield `NOT_A_POST_REQUEST`; a POST without the field
    /// yields `MISSING_FORM_VALUE`. The value is used verbatim otherwise.
    pub fn lookup_key(&self, field: &str) -> String {
        match self.method {
            Method::Post => self
                .form_value(field)
                .unwrap_or(MISSING_FORM_VALUE)
                .to_string(),
            Method::Get => NOT_A_POST_REQUEST.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Request, MISSING_FORM_VALUE, NOT_A_POST_REQUEST};

    #[test]
    fn lookup_key_uses_sentinels_for_get_and_missing_field() {
        assert_eq!(Request::get().lookup_key("student"), NOT_A_POST_REQUEST);
        assert_eq!(
            Request::post([("discipline", "Физика")]).lookup_key("student"),
            MISSING_FORM_VALUE
        );
    }

    #[test]
    fn lookup_key_keeps_posted_value_verbatim() {
        let request = Request::post([("student", " Петров Иван ")]);
        assert_eq!(request.lookup_key("student"), " Петров Иван ");
    }
}
