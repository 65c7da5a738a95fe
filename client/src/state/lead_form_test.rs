use super::*;
use crate::util::validation::CHECKED;

fn filled_contact() -> LeadFormState {
    let mut state = LeadFormState::new(CONTACT_FORM);
    state.set_field("first_name", "Ada");
    state.set_field("last_name", "Lovelace");
    state.set_field("email", "ada@example.com");
    state.set_field("message", "Interested");
    state
}

fn filled_pilot() -> LeadFormState {
    let mut state = LeadFormState::new(PILOT_FORM);
    state.set_field("first_name", "Ada");
    state.set_field("last_name", "Lovelace");
    state.set_field("email", "ada@example.com");
    state.set_field("company", "Analytical Engines Ltd");
    state.set_field("role", "Head of Credit Risk");
    state.set_field("portfolio", "Auto finance");
    state.set_field("consent", CHECKED);
    state
}

// =============================================================
// Schemas
// =============================================================

#[test]
fn contact_requires_names_email_and_message() {
    let required = CONTACT_FORM.fields.iter().filter(|f| f.is_required()).map(|f| f.name).collect::<Vec<_>>();
    assert_eq!(required, ["first_name", "last_name", "email", "message"]);
}

#[test]
fn contact_does_not_check_email_shape() {
    let mut state = filled_contact();
    state.set_field("email", "not-an-email");
    assert!(matches!(state.begin_submit(), BeginSubmit::Ready(_)));
}

#[test]
fn pilot_checks_email_shape() {
    let mut state = filled_pilot();
    state.set_field("email", "not-an-email");
    let BeginSubmit::Invalid(err) = state.begin_submit() else {
        panic!("expected invalid");
    };
    assert_eq!(err.field(), "email");
}

#[test]
fn pilot_requires_consent() {
    let mut state = filled_pilot();
    state.set_field("consent", "");
    let BeginSubmit::Invalid(err) = state.begin_submit() else {
        panic!("expected invalid");
    };
    assert_eq!(err.field(), "consent");
    assert_eq!(state.status, SubmissionStatus::Error);
}

#[test]
fn pilot_rejects_overlong_goals() {
    let mut state = filled_pilot();
    state.set_field("message", "x".repeat(1001));
    let BeginSubmit::Invalid(err) = state.begin_submit() else {
        panic!("expected invalid");
    };
    assert_eq!(err.to_string(), "Pilot goals must be at most 1000 characters.");
}

#[test]
fn schema_field_names_are_unique() {
    for schema in [CONTACT_FORM, PILOT_FORM] {
        for (i, a) in schema.fields.iter().enumerate() {
            assert!(schema.fields[i + 1..].iter().all(|b| b.name != a.name), "{}", a.name);
        }
    }
}

// =============================================================
// State machine
// =============================================================

#[test]
fn new_form_is_idle_and_blank() {
    let state = LeadFormState::new(CONTACT_FORM);
    assert_eq!(state.status, SubmissionStatus::Idle);
    assert_eq!(state.message, None);
    assert!(state.fields.is_blank());
}

#[test]
fn blank_required_field_sets_error_naming_field() {
    let mut state = filled_contact();
    state.set_field("first_name", "");
    let outcome = state.begin_submit();
    assert!(matches!(outcome, BeginSubmit::Invalid(_)));
    assert_eq!(state.status, SubmissionStatus::Error);
    assert_eq!(state.message.as_deref(), Some("First name is required."));
}

#[test]
fn valid_form_enters_submitting_with_snapshot() {
    let mut state = filled_contact();
    let BeginSubmit::Ready(values) = state.begin_submit() else {
        panic!("expected ready");
    };
    assert_eq!(values.get("first_name"), "Ada");
    assert_eq!(state.status, SubmissionStatus::Submitting);
    assert_eq!(state.message, None);
}

#[test]
fn begin_submit_while_submitting_is_busy() {
    let mut state = filled_contact();
    let _ = state.begin_submit();
    assert_eq!(state.begin_submit(), BeginSubmit::Busy);
    assert_eq!(state.status, SubmissionStatus::Submitting);
}

#[test]
fn success_clears_fields() {
    let mut state = filled_contact();
    let _ = state.begin_submit();
    state.complete(Ok(()), CONTACT_SUCCESS);
    assert_eq!(state.status, SubmissionStatus::Success);
    assert_eq!(state.message.as_deref(), Some(CONTACT_SUCCESS));
    assert!(state.fields.is_blank());
    assert_eq!(state.fields, CONTACT_FORM.empty_values());
}

#[test]
fn failure_keeps_fields() {
    let mut state = filled_contact();
    let before = state.fields.clone();
    let _ = state.begin_submit();
    state.complete(Err(DeliveryError::from_status(500, "boom")), CONTACT_SUCCESS);
    assert_eq!(state.status, SubmissionStatus::Error);
    assert_eq!(state.fields, before);
    assert!(state.message.as_deref().is_some_and(|m| m.contains("boom")));
}

#[test]
fn complete_outside_submitting_is_ignored() {
    let mut state = filled_contact();
    state.complete(Ok(()), CONTACT_SUCCESS);
    assert_eq!(state.status, SubmissionStatus::Idle);
    assert_eq!(state.field("first_name"), "Ada");
}

#[test]
fn resubmit_after_error_is_allowed() {
    let mut state = filled_contact();
    let _ = state.begin_submit();
    state.complete(Err(DeliveryError::Network("offline".to_owned())), CONTACT_SUCCESS);
    assert!(matches!(state.begin_submit(), BeginSubmit::Ready(_)));
}

#[test]
fn invalid_field_is_marked_until_edited() {
    let mut state = filled_contact();
    state.set_field("email", "");
    let _ = state.begin_submit();
    assert_eq!(state.invalid_field, Some("email"));
    state.set_field("message", "Still interested");
    assert_eq!(state.invalid_field, Some("email"));
    state.set_field("email", "ada@example.com");
    assert_eq!(state.invalid_field, None);
}
