//! "How it works" steps whose details expand independently.

use leptos::prelude::*;

use content::ContentRegistry;

use crate::state::disclosure::{Disclosure, IndependentDisclosure};

#[component]
pub fn ProcessSteps() -> impl IntoView {
    let registry = expect_context::<ContentRegistry>();
    let open = RwSignal::new(IndependentDisclosure::<&'static str>::new());

    view! {
        <ol class="process">
            {registry
                .process
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    let id = step.id;
                    let is_open = move || open.with(|d| d.is_open(&id));
                    view! {
                        <li class="process__step" class:process__step--open=is_open>
                            <span class="process__number">{index + 1}</span>
                            <div class="process__content">
                                <h3 class="process__title">{step.title}</h3>
                                <p class="process__summary">{step.summary}</p>
                                <button
                                    class="process__toggle"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| open.update(|d| d.toggle(id))
                                >
                                    {move || if is_open() { "Hide details" } else { "Show details" }}
                                </button>
                                <Show when=is_open>
                                    <p class="process__detail">{step.detail}</p>
                                </Show>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
