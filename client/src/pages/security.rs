//! Security and compliance page.

use leptos::prelude::*;
use leptos_meta::Title;

use content::faq::FaqTopic;
use content::metrics::MetricSet;
use content::routes::SiteRoute;

use crate::components::count_up::MetricStrip;
use crate::components::faq_accordion::FaqAccordion;

const CONTROLS: &[&str] = &[
    "Data processed and stored in EU regions only",
    "Encryption in transit (TLS 1.3) and at rest (AES-256)",
    "Pseudonymised applicant identifiers; no raw PII leaves your perimeter",
    "Role-based access with full audit trail",
    "Model documentation aligned with EBA loan-origination guidelines",
];

#[component]
pub fn SecurityPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Security.title()/>
        <section class="page-hero">
            <h1>"Security and compliance by default"</h1>
            <p>"Designed for banking-grade data protection and model governance."</p>
        </section>
        <section class="section">
            <MetricStrip set=MetricSet::Security/>
        </section>
        <section class="section">
            <h2 class="section__title">"Controls"</h2>
            <ul class="checklist">
                {CONTROLS.iter().map(|control| view! { <li class="checklist__item">{*control}</li> }).collect_view()}
            </ul>
        </section>
        <section class="section section--alt">
            <FaqAccordion topic=FaqTopic::Security/>
        </section>
    }
}
