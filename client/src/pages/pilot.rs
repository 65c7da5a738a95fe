//! Pilot application page.

use leptos::prelude::*;
use leptos_meta::Title;

use content::faq::FaqTopic;
use content::metrics::MetricSet;
use content::routes::SiteRoute;

use crate::components::count_up::MetricStrip;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::lead_form::PilotForm;

#[component]
pub fn PilotPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Pilot.title()/>
        <section class="page-hero">
            <h1>"Apply for the 90-day pilot"</h1>
            <p>"Shadow scoring on your own applications, a results review with your risk team, and no integration fee."</p>
        </section>
        <section class="section">
            <MetricStrip set=MetricSet::Pilot/>
        </section>
        <section class="section section--split">
            <PilotForm/>
            <FaqAccordion topic=FaqTopic::Pilot/>
        </section>
    }
}
