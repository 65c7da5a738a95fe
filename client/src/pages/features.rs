//! Features page.

use leptos::prelude::*;
use leptos_meta::Title;

use content::faq::FaqTopic;
use content::routes::SiteRoute;

use crate::components::faq_accordion::FaqAccordion;

#[derive(Clone, Copy)]
struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Alternative-data scoring",
        body: "Cash-flow, income regularity and behavioural signals score applicants with little or no bureau history.",
    },
    Feature {
        title: "Reason codes on every decision",
        body: "Each score ships with ranked, human-readable reason codes ready for adverse-action notices.",
    },
    Feature {
        title: "Shadow mode",
        body: "Run alongside your current scorecard and compare outcomes before any live decision changes.",
    },
    Feature {
        title: "Sub-second decisions",
        body: "A single REST call returns a score, a decision band and reason codes in under a second.",
    },
    Feature {
        title: "Continuous monitoring",
        body: "Drift, stability and fairness reports are generated weekly and shared with your model-risk team.",
    },
    Feature {
        title: "Policy controls",
        body: "Cut-offs, overrides and product rules stay in your hands and are versioned alongside the model.",
    },
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Features.title()/>
        <section class="page-hero">
            <h1>"Built for regulated lenders"</h1>
            <p>"Everything a credit-risk team needs to adopt a new score with confidence."</p>
        </section>
        <section class="section">
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <article class="feature-card">
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__body">{feature.body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <section class="section section--alt">
            <FaqAccordion topic=FaqTopic::General/>
        </section>
    }
}
