//! Lead submission pipeline: validate, deliver, settle.
//!
//! DESIGN
//! ======
//! `submit` is written against [`FormStateCell`] rather than a concrete
//! signal so the whole flow runs under a plain executor in tests. State is
//! only borrowed between awaits, never across one.
//!
//! The form's [`Lifetime`] is checked once the delivery settles. If the form
//! has unmounted the outcome is logged and dropped instead of written back.
//! Deliveries built for the form's `MountScope` are aborted on unmount, so
//! the settle happens promptly rather than when the relay answers.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};
use time::OffsetDateTime;

use super::delivery::{DeliveryError, LeadDelivery};
use super::payload::TemplateParams;
use crate::state::lead_form::{BeginSubmit, LeadFormState};
use crate::util::lifetime::Lifetime;
use crate::util::validation::ValidationError;

/// Mutable access to a form's state, if it still exists.
pub trait FormStateCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut LeadFormState) -> R) -> Option<R>;
}

impl FormStateCell for RefCell<LeadFormState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut LeadFormState) -> R) -> Option<R> {
        let mut state = self.try_borrow_mut().ok()?;
        Some(f(&mut state))
    }
}

impl FormStateCell for RwSignal<LeadFormState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut LeadFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight; nothing was sent.
    Busy,
    /// Validation failed; nothing was sent.
    Invalid(ValidationError),
    Delivered,
    Failed(DeliveryError),
    /// The form went away before the outcome could be recorded.
    Dropped,
}

/// Run one submission against `state`.
pub async fn submit<S>(
    state: &S,
    delivery: &dyn LeadDelivery,
    lifetime: &Lifetime,
    now: OffsetDateTime,
    success_message: &str,
) -> SubmitOutcome
where
    S: FormStateCell + ?Sized,
{
    if !lifetime.is_alive() {
        return SubmitOutcome::Dropped;
    }
    let Some(begin) = state.with_state(|s| {
        let begin = s.begin_submit();
        match begin {
            BeginSubmit::Ready(values) => Ok(TemplateParams::build(&s.schema, &values, now)),
            BeginSubmit::Invalid(err) => Err(SubmitOutcome::Invalid(err)),
            BeginSubmit::Busy => Err(SubmitOutcome::Busy),
        }
    }) else {
        return SubmitOutcome::Dropped;
    };
    let params = match begin {
        Ok(params) => params,
        Err(outcome) => return outcome,
    };

    let result = delivery.deliver(&params).await;

    if !lifetime.is_alive() {
        leptos::logging::warn!("form unmounted before delivery settled; dropping outcome");
        return SubmitOutcome::Dropped;
    }
    if let Err(err) = &result {
        leptos::logging::warn!("lead delivery failed: {err}");
    }
    let recorded = state.with_state(|s| s.complete(result.clone(), success_message));
    match (recorded, result) {
        (None, _) => SubmitOutcome::Dropped,
        (Some(()), Ok(())) => SubmitOutcome::Delivered,
        (Some(()), Err(err)) => SubmitOutcome::Failed(err),
    }
}
