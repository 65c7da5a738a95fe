//! Lead-capture form state and the two form configurations.
//!
//! DESIGN
//! ======
//! `LeadFormState` is the whole per-form state machine:
//!
//! ```text
//! Idle|Success|Error --begin_submit (invalid)--> Error
//! Idle|Success|Error --begin_submit (valid)----> Submitting
//! Submitting --------begin_submit--------------> Submitting (busy)
//! Submitting --------complete(Ok)--------------> Success, fields cleared
//! Submitting --------complete(Err)-------------> Error, fields kept
//! ```
//!
//! Only a successful delivery resets field values. Contact and pilot forms are
//! separate [`FormSchema`]s driven by the same state type.

#[cfg(test)]
#[path = "lead_form_test.rs"]
mod lead_form_test;

use crate::net::delivery::DeliveryError;
use crate::util::validation::{FieldKind, FieldSpec, FieldValues, FormSchema, Rule, ValidationError};

pub const CONTACT_SUCCESS: &str = "Thank you! Your message has been sent. Our team will be in touch within one business day.";
pub const PILOT_SUCCESS: &str =
    "Application received. We'll review your portfolio details and contact you within five business days.";

const COUNTRIES: &[&str] = &[
    "Spain",
    "United Kingdom",
    "Germany",
    "Portugal",
    "Poland",
    "Brazil",
    "Mexico",
    "United States",
    "Other",
];

const PORTFOLIOS: &[&str] = &["Auto finance", "Credit cards", "SME lending", "Personal loans", "Mortgages"];

const MONTHLY_VOLUMES: &[&str] = &["Under 5,000", "5,000 to 25,000", "25,000 to 100,000", "Over 100,000"];

pub const CONTACT_FORM: FormSchema = FormSchema {
    id: "contact",
    fields: &[
        FieldSpec {
            name: "first_name",
            label: "First name",
            kind: FieldKind::Text,
            rules: &[Rule::Required],
            placeholder: "Ada",
        },
        FieldSpec {
            name: "last_name",
            label: "Last name",
            kind: FieldKind::Text,
            rules: &[Rule::Required],
            placeholder: "Lovelace",
        },
        FieldSpec {
            name: "company",
            label: "Company",
            kind: FieldKind::Text,
            rules: &[],
            placeholder: "Santander Consumer Finance",
        },
        FieldSpec {
            name: "email",
            label: "Work email",
            kind: FieldKind::Email,
            rules: &[Rule::Required],
            placeholder: "ada@example.com",
        },
        FieldSpec {
            name: "phone",
            label: "Phone",
            kind: FieldKind::Phone,
            rules: &[],
            placeholder: "+34 600 000 000",
        },
        FieldSpec {
            name: "country",
            label: "Country",
            kind: FieldKind::Select(COUNTRIES),
            rules: &[],
            placeholder: "Select a country",
        },
        FieldSpec {
            name: "message",
            label: "Message",
            kind: FieldKind::LongText,
            rules: &[Rule::Required],
            placeholder: "Tell us about your lending portfolio",
        },
    ],
};

pub const PILOT_FORM: FormSchema = FormSchema {
    id: "pilot",
    fields: &[
        FieldSpec {
            name: "first_name",
            label: "First name",
            kind: FieldKind::Text,
            rules: &[Rule::Required, Rule::MaxLen(60)],
            placeholder: "Ada",
        },
        FieldSpec {
            name: "last_name",
            label: "Last name",
            kind: FieldKind::Text,
            rules: &[Rule::Required, Rule::MaxLen(60)],
            placeholder: "Lovelace",
        },
        FieldSpec {
            name: "email",
            label: "Work email",
            kind: FieldKind::Email,
            rules: &[Rule::Required, Rule::Email, Rule::MaxLen(254)],
            placeholder: "ada@example.com",
        },
        FieldSpec {
            name: "company",
            label: "Institution",
            kind: FieldKind::Text,
            rules: &[Rule::Required, Rule::MaxLen(120)],
            placeholder: "Santander Consumer Finance",
        },
        FieldSpec {
            name: "role",
            label: "Role",
            kind: FieldKind::Text,
            rules: &[Rule::Required, Rule::MaxLen(80)],
            placeholder: "Head of Credit Risk",
        },
        FieldSpec {
            name: "portfolio",
            label: "Portfolio",
            kind: FieldKind::Select(PORTFOLIOS),
            rules: &[Rule::Required],
            placeholder: "Select a portfolio",
        },
        FieldSpec {
            name: "monthly_volume",
            label: "Monthly applications",
            kind: FieldKind::Select(MONTHLY_VOLUMES),
            rules: &[],
            placeholder: "Select a range",
        },
        FieldSpec {
            name: "message",
            label: "Pilot goals",
            kind: FieldKind::LongText,
            rules: &[Rule::MaxLen(1000)],
            placeholder: "What would a successful pilot look like?",
        },
        FieldSpec {
            name: "consent",
            label: "Data processing consent",
            kind: FieldKind::Checkbox,
            rules: &[Rule::Checked],
            placeholder: "I agree to LumiqAI processing these details to evaluate the pilot.",
        },
    ],
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Result of asking the form to start a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BeginSubmit {
    /// A submission is already in flight.
    Busy,
    Invalid(ValidationError),
    /// Validation passed; deliver these values.
    Ready(FieldValues),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadFormState {
    pub schema: FormSchema,
    pub fields: FieldValues,
    pub status: SubmissionStatus,
    pub message: Option<String>,
    /// Field named by the last validation error, until it is edited.
    pub invalid_field: Option<&'static str>,
}

impl LeadFormState {
    #[must_use]
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            fields: schema.empty_values(),
            status: SubmissionStatus::Idle,
            message: None,
            invalid_field: None,
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.set(name, value);
        if self.invalid_field == Some(name) {
            self.invalid_field = None;
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Validate and, if valid, enter `Submitting`.
    pub fn begin_submit(&mut self) -> BeginSubmit {
        if self.is_submitting() {
            return BeginSubmit::Busy;
        }
        if let Err(err) = self.schema.validate(&self.fields) {
            self.status = SubmissionStatus::Error;
            self.message = Some(err.to_string());
            self.invalid_field = Some(err.field());
            return BeginSubmit::Invalid(err);
        }
        self.status = SubmissionStatus::Submitting;
        self.message = None;
        self.invalid_field = None;
        BeginSubmit::Ready(self.fields.clone())
    }

    /// Settle an in-flight submission. Ignored unless submitting.
    pub fn complete(&mut self, outcome: Result<(), DeliveryError>, success_message: &str) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = self.schema.empty_values();
                self.status = SubmissionStatus::Success;
                self.message = Some(success_message.to_owned());
            }
            Err(err) => {
                self.status = SubmissionStatus::Error;
                self.message = Some(err.user_message());
            }
        }
    }
}
