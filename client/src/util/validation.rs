//! Declarative form schemas and the rule checks run before any delivery.
//!
//! DESIGN
//! ======
//! A [`FormSchema`] is a static list of [`FieldSpec`]s. Validation walks the
//! fields in schema order and, within a field, the rules in declaration
//! order; the first violation wins. Shape rules (`Email`, `MaxLen`) only run
//! on non-empty values so optional fields may stay blank.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

/// Value stored for a ticked checkbox.
pub const CHECKED: &str = "true";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MaxLen(usize),
    Checked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    LongText,
    Select(&'static [&'static str]),
    Checkbox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
    pub placeholder: &'static str,
}

impl FieldSpec {
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required | Rule::Checked))
    }

    fn check(&self, value: &str) -> Result<(), ValidationError> {
        let trimmed = value.trim();
        for rule in self.rules {
            match *rule {
                Rule::Required if trimmed.is_empty() => {
                    return Err(ValidationError::Missing { field: self.name, label: self.label });
                }
                Rule::Email if !trimmed.is_empty() && !is_valid_email(trimmed) => {
                    return Err(ValidationError::InvalidEmail { field: self.name, label: self.label });
                }
                Rule::MaxLen(max) if trimmed.chars().count() > max => {
                    return Err(ValidationError::TooLong { field: self.name, label: self.label, max });
                }
                Rule::Checked if value != CHECKED => {
                    return Err(ValidationError::Unchecked { field: self.name, label: self.label });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{label} is required.")]
    Missing { field: &'static str, label: &'static str },
    #[error("{label} must be a valid email address.")]
    InvalidEmail { field: &'static str, label: &'static str },
    #[error("{label} must be at most {max} characters.")]
    TooLong { field: &'static str, label: &'static str, max: usize },
    #[error("{label} must be accepted to continue.")]
    Unchecked { field: &'static str, label: &'static str },
}

impl ValidationError {
    /// Name of the field that failed.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field, .. }
            | Self::InvalidEmail { field, .. }
            | Self::TooLong { field, .. }
            | Self::Unchecked { field, .. } => field,
        }
    }
}

/// Current field values keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `name`, or `""` when unset.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map_or("", String::as_str)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_owned(), value.into());
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// True when every stored value is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub id: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// One empty entry per schema field.
    #[must_use]
    pub fn empty_values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        for spec in self.fields {
            values.set(spec.name, String::new());
        }
        values
    }

    /// Check `values` against every rule, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in schema order.
    pub fn validate(&self, values: &FieldValues) -> Result<(), ValidationError> {
        self.fields.iter().try_for_each(|spec| spec.check(values.get(spec.name)))
    }
}

/// Loose shape check: one `@`, non-empty local part, dotted domain, no spaces.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && tld.len() >= 2 && !domain.contains("..")
}
