//! Lead-capture forms rendered from a [`FormSchema`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns a `RwSignal<LeadFormState>` and a [`MountScope`]. Submit
//! hands both to `net::pipeline::submit` on a local task; the pipeline writes
//! the outcome back only if the form is still mounted, and unmounting aborts
//! an in-flight relay request.

use leptos::prelude::*;

use crate::net::emailjs::DeliveryChoice;
use crate::state::lead_form::{CONTACT_FORM, CONTACT_SUCCESS, LeadFormState, PILOT_FORM, PILOT_SUCCESS, SubmissionStatus};
use crate::util::mount::MountScope;
use crate::util::validation::{CHECKED, FieldKind, FieldSpec, FormSchema};

/// Generic schema-driven form.
#[component]
pub fn LeadForm(
    schema: FormSchema,
    delivery: DeliveryChoice,
    success_message: &'static str,
    submit_label: &'static str,
) -> impl IntoView {
    let form = RwSignal::new(LeadFormState::new(schema));
    let scope = MountScope::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let delivery = delivery.build(&scope);
            let mounted = scope.lifetime().clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::pipeline::submit(
                    &form,
                    delivery.as_ref(),
                    &mounted,
                    time::OffsetDateTime::now_utc(),
                    success_message,
                )
                .await;
                leptos::logging::log!("{} form submission: {outcome:?}", schema.id);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&delivery, &scope);
        }
    };

    let submitting = move || form.with(LeadFormState::is_submitting);
    let has_message = move || form.with(|f| f.message.is_some());

    view! {
        <form class="lead-form" id=format!("{}-form", schema.id) novalidate=true on:submit=on_submit>
            {schema.fields.iter().map(|spec| field_view(form, spec, schema.id)).collect_view()}
            <Show when=has_message>
                <p
                    class="lead-form__status"
                    class:lead-form__status--success=move || form.with(|f| f.status == SubmissionStatus::Success)
                    class:lead-form__status--error=move || form.with(|f| f.status == SubmissionStatus::Error)
                    role="status"
                    aria-live="polite"
                >
                    {move || form.with(|f| f.message.clone().unwrap_or_default())}
                </p>
            </Show>
            <button type="submit" class="lead-form__submit" disabled=submitting>
                {move || if submitting() { "Sending…" } else { submit_label }}
            </button>
        </form>
    }
}

fn field_view(form: RwSignal<LeadFormState>, spec: &'static FieldSpec, form_id: &'static str) -> impl IntoView {
    let name = spec.name;
    let input_id = format!("{form_id}-{name}");
    let aria_required = if spec.is_required() { "true" } else { "false" };
    let invalid = move || form.with(|f| f.invalid_field == Some(name));
    let value = move || form.with(|f| f.field(name).to_owned());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_field(name, event_target_value(&ev)));

    let control = match spec.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Phone => {
            let input_type = match spec.kind {
                FieldKind::Email => "email",
                FieldKind::Phone => "tel",
                _ => "text",
            };
            view! {
                <input
                    class="lead-form__input"
                    id=input_id.clone()
                    name=name
                    type=input_type
                    placeholder=spec.placeholder
                    aria-required=aria_required
                    aria-invalid=move || invalid().to_string()
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
        FieldKind::LongText => view! {
            <textarea
                class="lead-form__textarea"
                id=input_id.clone()
                name=name
                rows="5"
                placeholder=spec.placeholder
                aria-required=aria_required
                aria-invalid=move || invalid().to_string()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                class="lead-form__select"
                id=input_id.clone()
                name=name
                aria-required=aria_required
                aria-invalid=move || invalid().to_string()
                prop:value=value
                on:change=on_input
            >
                <option value="">{spec.placeholder}</option>
                {options.iter().map(|option| view! { <option value=*option>{*option}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <label class="lead-form__checkbox">
                <input
                    type="checkbox"
                    id=input_id.clone()
                    name=name
                    aria-required=aria_required
                    aria-invalid=move || invalid().to_string()
                    prop:checked=move || form.with(|f| f.field(name) == CHECKED)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.set_field(name, if checked { CHECKED } else { "" }));
                    }
                />
                <span>{spec.placeholder}</span>
            </label>
        }
        .into_any(),
    };

    let show_label = !matches!(spec.kind, FieldKind::Checkbox);
    view! {
        <div class="lead-form__field" class:lead-form__field--invalid=invalid>
            <Show when=move || show_label>
                <label class="lead-form__label" for=input_id.clone()>
                    {spec.label}
                    {spec.is_required().then_some(" *")}
                </label>
            </Show>
            {control}
        </div>
    }
}

/// Contact form delivered through the relay configured for this build.
#[component]
pub fn ContactForm() -> impl IntoView {
    let delivery = expect_context::<DeliveryChoice>();
    view! {
        <LeadForm
            schema=CONTACT_FORM
            delivery=delivery
            success_message=CONTACT_SUCCESS
            submit_label="Send message"
        />
    }
}

/// Pilot application form. Applications are acknowledged without a relay.
#[component]
pub fn PilotForm() -> impl IntoView {
    view! {
        <LeadForm
            schema=PILOT_FORM
            delivery=DeliveryChoice::Simulated
            success_message=PILOT_SUCCESS
            submit_label="Apply for the pilot"
        />
    }
}
