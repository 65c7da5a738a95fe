//! Competitor comparison cards.
//!
//! One card is expanded at a time (exclusive disclosure). The full comparison
//! for a card opens in a modal keyed by the card's index.

use leptos::prelude::*;

use content::ContentRegistry;
use content::competitors::Competitor;

use crate::components::modal::Modal;
use crate::state::disclosure::{Disclosure, ExclusiveDisclosure, IndependentDisclosure};

#[component]
pub fn CompetitorCards() -> impl IntoView {
    let registry = expect_context::<ContentRegistry>();
    let expanded = RwSignal::new(ExclusiveDisclosure::<&'static str>::new());
    let details = RwSignal::new(IndependentDisclosure::<usize>::new());

    view! {
        <div class="competitors">
            {registry
                .competitors
                .iter()
                .enumerate()
                .map(|(index, competitor)| competitor_card(competitor, index, expanded, details))
                .collect_view()}
        </div>
    }
}

fn competitor_card(
    competitor: &'static Competitor,
    index: usize,
    expanded: RwSignal<ExclusiveDisclosure<&'static str>>,
    details: RwSignal<IndependentDisclosure<usize>>,
) -> impl IntoView {
    let id = competitor.id;
    let is_open = move || expanded.with(|d| d.is_open(&id));
    let detail_open = move || details.with(|d| d.is_open(&index));
    let close_detail = Callback::new(move |()| details.update(|d| d.close(&index)));

    view! {
        <article class="competitor-card" class:competitor-card--open=is_open>
            <button
                class="competitor-card__header"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| expanded.update(|d| d.toggle(id))
            >
                <span class="competitor-card__category">{competitor.category}</span>
                <h3 class="competitor-card__name">{competitor.name}</h3>
                <span class="competitor-card__chevron" aria-hidden="true"></span>
            </button>
            <Show when=is_open>
                <div class="competitor-card__body">
                    <p class="competitor-card__summary">{competitor.summary}</p>
                    <ul class="competitor-card__gaps">
                        {competitor.gaps.iter().map(|gap| view! { <li>{*gap}</li> }).collect_view()}
                    </ul>
                    <button class="competitor-card__more" on:click=move |_| details.update(|d| d.toggle(index))>
                        "Full comparison"
                    </button>
                </div>
            </Show>
            <Show when=detail_open>
                <Modal title=competitor.name on_close=close_detail>
                    <h3>"Where they are strong"</h3>
                    <ul>{competitor.strengths.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ul>
                    <h3>"Where they fall short"</h3>
                    <ul>{competitor.gaps.iter().map(|g| view! { <li>{*g}</li> }).collect_view()}</ul>
                    <h3>"The LumiqAI difference"</h3>
                    <p class="competitor-card__edge">{competitor.lumiq_edge}</p>
                </Modal>
            </Show>
        </article>
    }
}
