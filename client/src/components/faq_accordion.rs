//! FAQ accordion; opening one answer closes the previous one.

use leptos::prelude::*;

use content::ContentRegistry;
use content::faq::FaqTopic;

use crate::state::disclosure::{Disclosure, ExclusiveDisclosure};

#[component]
pub fn FaqAccordion(topic: FaqTopic) -> impl IntoView {
    let registry = expect_context::<ContentRegistry>();
    let open = RwSignal::new(ExclusiveDisclosure::<&'static str>::new());

    view! {
        <section class="faq">
            <h2 class="faq__heading">{topic.heading()}</h2>
            {registry
                .faq(topic)
                .iter()
                .map(|entry| {
                    let id = entry.id;
                    let is_open = move || open.with(|d| d.is_open(&id));
                    view! {
                        <div class="faq__item" class:faq__item--open=is_open>
                            <button
                                class="faq__question"
                                id=format!("faq-{id}")
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| open.update(|d| d.toggle(id))
                            >
                                {entry.question}
                            </button>
                            <Show when=is_open>
                                <p class="faq__answer" role="region" aria-labelledby=format!("faq-{id}")>
                                    {entry.answer}
                                </p>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
