//! Case-study page with outcome table and quote modals.

use leptos::prelude::*;
use leptos_meta::Title;

use content::ContentRegistry;
use content::routes::SiteRoute;

use crate::components::modal::Modal;
use crate::state::disclosure::{Disclosure, IndependentDisclosure};

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    let study = expect_context::<ContentRegistry>().case_study;
    let quotes = RwSignal::new(IndependentDisclosure::<usize>::new());

    view! {
        <Title text=SiteRoute::CaseStudy.title()/>
        <section class="page-hero">
            <p class="page-hero__eyebrow">{study.lender}</p>
            <h1>{study.title}</h1>
            <p>{study.summary}</p>
        </section>
        <section class="section">
            <table class="outcomes">
                <thead>
                    <tr>
                        <th>"Metric"</th>
                        <th>"Before"</th>
                        <th>"With LumiqAI"</th>
                    </tr>
                </thead>
                <tbody>
                    {study
                        .outcomes
                        .iter()
                        .map(|outcome| {
                            view! {
                                <tr>
                                    <td>{outcome.label}</td>
                                    <td class="outcomes__before">{outcome.before}</td>
                                    <td class="outcomes__after">{outcome.after}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
        <section class="section section--alt">
            <h2 class="section__title">"In their words"</h2>
            <div class="quotes">
                {study
                    .quotes
                    .iter()
                    .enumerate()
                    .map(|(index, quote)| {
                        let close = Callback::new(move |()| quotes.update(|q| q.close(&index)));
                        view! {
                            <button class="quote-card" on:click=move |_| quotes.update(|q| q.toggle(index))>
                                <span class="quote-card__author">{quote.author}</span>
                                <span class="quote-card__role">{quote.role}</span>
                            </button>
                            <Show when=move || quotes.with(|q| q.is_open(&index))>
                                <Modal title=quote.author on_close=close>
                                    <blockquote class="quote">{quote.text}</blockquote>
                                    <p class="quote__role">{quote.role}</p>
                                </Modal>
                            </Show>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
