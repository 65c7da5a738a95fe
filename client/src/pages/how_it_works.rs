//! How-it-works page.

use leptos::prelude::*;
use leptos_meta::Title;

use content::faq::FaqTopic;
use content::routes::SiteRoute;

use crate::components::faq_accordion::FaqAccordion;
use crate::components::process_steps::ProcessSteps;

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::HowItWorks.title()/>
        <section class="page-hero">
            <h1>"From raw data to a decision in four steps"</h1>
            <p>"LumiqAI plugs into your origination flow with one API call and no change to your decision policy."</p>
        </section>
        <section class="section">
            <ProcessSteps/>
        </section>
        <section class="section section--alt">
            <FaqAccordion topic=FaqTopic::Integration/>
        </section>
    }
}
