//! Flat template variables sent with each lead.
//!
//! Every schema field becomes one variable under its own name. Two derived
//! variables are added: `full_name` and a human-readable `submitted_at`.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use std::collections::BTreeMap;

use serde::Serialize;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::util::validation::{CHECKED, FieldKind, FieldValues, FormSchema};

/// Stand-in for optional fields left blank.
pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateParams(BTreeMap<String, String>);

impl TemplateParams {
    #[must_use]
    pub fn build(schema: &FormSchema, values: &FieldValues, now: OffsetDateTime) -> Self {
        let mut params = BTreeMap::new();
        for spec in schema.fields {
            let raw = values.get(spec.name).trim();
            let value = match spec.kind {
                FieldKind::Checkbox if raw == CHECKED => "Yes".to_owned(),
                FieldKind::Checkbox => "No".to_owned(),
                _ if raw.is_empty() => NOT_PROVIDED.to_owned(),
                _ => raw.to_owned(),
            };
            params.insert(spec.name.to_owned(), value);
        }
        params.insert("full_name".to_owned(), full_name(values));
        params.insert("submitted_at".to_owned(), human_timestamp(now));
        Self(params)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// `"{first} {last}"`, tolerating either part being blank.
#[must_use]
pub fn full_name(values: &FieldValues) -> String {
    let first = values.get("first_name").trim();
    let last = values.get("last_name").trim();
    match (first.is_empty(), last.is_empty()) {
        (false, false) => format!("{first} {last}"),
        (false, true) => first.to_owned(),
        (true, false) => last.to_owned(),
        (true, true) => NOT_PROVIDED.to_owned(),
    }
}

/// e.g. `14 March 2026, 09:05 UTC`.
#[must_use]
pub fn human_timestamp(now: OffsetDateTime) -> String {
    let format = format_description!("[day padding:none] [month repr:long] [year], [hour]:[minute] UTC");
    let utc = now.to_offset(time::UtcOffset::UTC);
    utc.format(format).unwrap_or_else(|_| utc.unix_timestamp().to_string())
}
