use super::*;
use crate::state::lead_form::{CONTACT_FORM, CONTACT_SUCCESS, PILOT_FORM, PILOT_SUCCESS, SubmissionStatus};
use crate::net::emailjs::SimulatedDelivery;
use crate::util::mount::MountScope;
use crate::util::validation::CHECKED;
use futures::channel::oneshot;
use futures::executor::block_on;
use std::cell::Cell;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2026-03-14 09:05 UTC);

struct FakeDelivery {
    outcome: Result<(), DeliveryError>,
    calls: Cell<usize>,
    seen: RefCell<Vec<TemplateParams>>,
}

impl FakeDelivery {
    fn new(outcome: Result<(), DeliveryError>) -> Self {
        Self { outcome, calls: Cell::new(0), seen: RefCell::new(Vec::new()) }
    }
}

#[async_trait::async_trait(?Send)]
impl LeadDelivery for FakeDelivery {
    async fn deliver(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(params.clone());
        self.outcome.clone()
    }
}

/// Holds the delivery open until the sender fires.
struct GatedDelivery {
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    calls: Cell<usize>,
}

impl GatedDelivery {
    fn new(gate: oneshot::Receiver<()>) -> Self {
        Self { gate: RefCell::new(Some(gate)), calls: Cell::new(0) }
    }
}

#[async_trait::async_trait(?Send)]
impl LeadDelivery for GatedDelivery {
    async fn deliver(&self, _params: &TemplateParams) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(())
    }
}

/// Stays in flight until the scope it was built for ends, then fails the way
/// an aborted request does.
struct AbortableDelivery {
    aborted: RefCell<Option<oneshot::Receiver<()>>>,
    settled: Cell<bool>,
}

impl AbortableDelivery {
    fn new(scope: &MountScope) -> Self {
        let (tx, rx) = oneshot::channel();
        scope.defer(move || {
            let _ = tx.send(());
        });
        Self { aborted: RefCell::new(Some(rx)), settled: Cell::new(false) }
    }
}

#[async_trait::async_trait(?Send)]
impl LeadDelivery for AbortableDelivery {
    async fn deliver(&self, _params: &TemplateParams) -> Result<(), DeliveryError> {
        let aborted = self.aborted.borrow_mut().take();
        if let Some(aborted) = aborted {
            let _ = aborted.await;
        }
        self.settled.set(true);
        Err(DeliveryError::Network("The user aborted a request.".to_owned()))
    }
}

fn contact(first: &str, last: &str, email: &str, message: &str) -> RefCell<LeadFormState> {
    let mut state = LeadFormState::new(CONTACT_FORM);
    state.set_field("first_name", first);
    state.set_field("last_name", last);
    state.set_field("email", email);
    state.set_field("message", message);
    RefCell::new(state)
}

fn run(state: &RefCell<LeadFormState>, delivery: &dyn LeadDelivery) -> SubmitOutcome {
    block_on(submit(state, delivery, &Lifetime::new(), NOW, CONTACT_SUCCESS))
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn ada_lovelace_success_clears_form() {
    let state = contact("Ada", "Lovelace", "ada@example.com", "Interested");
    let delivery = FakeDelivery::new(Ok(()));

    assert_eq!(run(&state, &delivery), SubmitOutcome::Delivered);

    let state = state.borrow();
    assert_eq!(state.status, SubmissionStatus::Success);
    assert_eq!(state.message.as_deref(), Some(CONTACT_SUCCESS));
    assert!(state.fields.is_blank());
    assert_eq!(delivery.calls.get(), 1);
}

#[test]
fn missing_first_name_errors_without_network_call() {
    let state = contact("", "Lovelace", "ada@example.com", "Interested");
    let delivery = FakeDelivery::new(Ok(()));

    let outcome = run(&state, &delivery);

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref err) if err.field() == "first_name"));
    let state = state.borrow();
    assert_eq!(state.status, SubmissionStatus::Error);
    assert!(state.message.as_deref().is_some_and(|m| m.contains("First name")));
    assert_eq!(delivery.calls.get(), 0);
}

#[test]
fn delivery_receives_fields_timestamp_and_full_name() {
    let state = contact("Ada", "Lovelace", "ada@example.com", "Interested");
    let delivery = FakeDelivery::new(Ok(()));
    let _ = run(&state, &delivery);

    let seen = delivery.seen.borrow();
    let params = &seen[0];
    assert_eq!(params.get("first_name"), Some("Ada"));
    assert_eq!(params.get("last_name"), Some("Lovelace"));
    assert_eq!(params.get("email"), Some("ada@example.com"));
    assert_eq!(params.get("message"), Some("Interested"));
    assert_eq!(params.get("full_name"), Some("Ada Lovelace"));
    assert_eq!(params.get("submitted_at"), Some("14 March 2026, 09:05 UTC"));
}

#[test]
fn failed_delivery_keeps_entered_values() {
    let state = contact("Ada", "Lovelace", "ada@example.com", "Interested");
    let before = state.borrow().fields.clone();
    let delivery = FakeDelivery::new(Err(DeliveryError::from_status(500, "Internal error")));

    let outcome = run(&state, &delivery);

    assert!(matches!(outcome, SubmitOutcome::Failed(DeliveryError::Rejected { status: 500, .. })));
    let state = state.borrow();
    assert_eq!(state.status, SubmissionStatus::Error);
    assert_eq!(state.fields, before);
    assert!(state.message.as_deref().is_some_and(|m| m.contains("Internal error")));
}

#[test]
fn failure_categories_reach_the_form_message() {
    let cases = [
        DeliveryError::from_status(401, "bad key"),
        DeliveryError::Network("offline".to_owned()),
        DeliveryError::from_status(502, "gateway"),
    ];
    for err in cases {
        let state = contact("Ada", "Lovelace", "ada@example.com", "Interested");
        let expected = err.user_message();
        let _ = run(&state, &FakeDelivery::new(Err(err)));
        assert_eq!(state.borrow().message.as_deref(), Some(expected.as_str()));
    }
}

// =============================================================
// Concurrency and lifetime
// =============================================================

#[test]
fn second_submit_while_submitting_makes_no_second_call() {
    let state = contact("Ada", "Lovelace", "ada@example.com", "Interested");
    let (tx, rx) = oneshot::channel();
    let delivery = GatedDelivery::new(rx);
    let lifetime = Lifetime::new();

    let (state_ref, delivery_ref, lifetime_ref) = (&state, &delivery, &lifetime);
    let first = submit(state_ref, delivery_ref, lifetime_ref, NOW, CONTACT_SUCCESS);
    let second = async move {
        let outcome = submit(state_ref, delivery_ref, lifetime_ref, NOW, CONTACT_SUCCESS).await;
        let _ = tx.send(());
        outcome
    };
    let (first, second) = block_on(async { futures::join!(first, second) });

    assert_eq!(first, SubmitOutcome::Delivered);
    assert_eq!(second, SubmitOutcome::Busy);
    assert_eq!(delivery.calls.get(), 1);
    assert_eq!(state.borrow().status, SubmissionStatus::Success);
}

#[test]
fn outcome_after_unmount_is_dropped() {
    let state = contact("Ada", "Lovelace", "ada@example.com", "Interested");
    let (tx, rx) = oneshot::channel();
    let delivery = GatedDelivery::new(rx);
    let lifetime = Lifetime::new();

    let lifetime_ref = &lifetime;
    let pending = submit(&state, &delivery, lifetime_ref, NOW, CONTACT_SUCCESS);
    let unmount = async move {
        lifetime_ref.end();
        let _ = tx.send(());
    };
    let (outcome, ()) = block_on(async { futures::join!(pending, unmount) });

    assert_eq!(outcome, SubmitOutcome::Dropped);
    let state = state.borrow();
    assert_eq!(state.status, SubmissionStatus::Submitting);
    assert_eq!(state.message, None);
    assert_eq!(state.field("first_name"), "Ada");
}

#[test]
fn unmount_cancels_in_flight_delivery() {
    let state = contact("Ada", "Lovelace", "ada@example.com", "Interested");
    let owner = leptos::prelude::Owner::new();
    let scope = owner.with(MountScope::new);
    let delivery = AbortableDelivery::new(&scope);

    let pending = submit(&state, &delivery, scope.lifetime(), NOW, CONTACT_SUCCESS);
    let unmount = async {
        owner.cleanup();
    };
    let (outcome, ()) = block_on(async { futures::join!(pending, unmount) });

    assert!(delivery.settled.get());
    assert_eq!(outcome, SubmitOutcome::Dropped);
    assert_eq!(state.borrow().message, None);
}

#[test]
fn submit_after_unmount_never_delivers() {
    let state = contact("Ada", "Lovelace", "ada@example.com", "Interested");
    let delivery = FakeDelivery::new(Ok(()));
    let lifetime = Lifetime::new();
    lifetime.end();

    let outcome = block_on(submit(&state, &delivery, &lifetime, NOW, CONTACT_SUCCESS));

    assert_eq!(outcome, SubmitOutcome::Dropped);
    assert_eq!(delivery.calls.get(), 0);
    assert_eq!(state.borrow().status, SubmissionStatus::Idle);
}

#[test]
fn submitting_is_left_on_every_settled_path() {
    for outcome in [Ok(()), Err(DeliveryError::Network("offline".to_owned()))] {
        let state = contact("Ada", "Lovelace", "ada@example.com", "Interested");
        let _ = run(&state, &FakeDelivery::new(outcome));
        assert_ne!(state.borrow().status, SubmissionStatus::Submitting);
    }
}

// =============================================================
// Pilot form
// =============================================================

#[test]
fn pilot_form_with_simulated_delivery_succeeds() {
    let mut pilot = LeadFormState::new(PILOT_FORM);
    for (name, value) in [
        ("first_name", "Ada"),
        ("last_name", "Lovelace"),
        ("email", "ada@example.com"),
        ("company", "Analytical Engines Ltd"),
        ("role", "Head of Credit Risk"),
        ("portfolio", "Auto finance"),
        ("consent", CHECKED),
    ] {
        pilot.set_field(name, value);
    }
    let state = RefCell::new(pilot);

    let outcome = block_on(submit(&state, &SimulatedDelivery::default(), &Lifetime::new(), NOW, PILOT_SUCCESS));

    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(state.borrow().status, SubmissionStatus::Success);
    assert!(state.borrow().fields.is_blank());
}

#[test]
fn pilot_shape_violation_never_reaches_delivery() {
    let mut pilot = LeadFormState::new(PILOT_FORM);
    pilot.set_field("first_name", "Ada");
    pilot.set_field("last_name", "Lovelace");
    pilot.set_field("email", "ada-at-example");
    let state = RefCell::new(pilot);
    let delivery = FakeDelivery::new(Ok(()));

    let outcome = block_on(submit(&state, &delivery, &Lifetime::new(), NOW, PILOT_SUCCESS));

    assert!(matches!(outcome, SubmitOutcome::Invalid(ref err) if err.field() == "email"));
    assert_eq!(delivery.calls.get(), 0);
}
