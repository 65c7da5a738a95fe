//! Solutions page: per-vertical funnels and competitive positioning.

use leptos::prelude::*;
use leptos_meta::Title;

use content::funnel::FunnelVertical;
use content::metrics::MetricSet;
use content::routes::SiteRoute;

use crate::components::competitor_cards::CompetitorCards;
use crate::components::count_up::MetricStrip;
use crate::components::funnel_tabs::FunnelTabs;

#[component]
pub fn SolutionsPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Solutions.title()/>
        <section class="page-hero">
            <h1>"Solutions for every lending vertical"</h1>
            <p>"Auto finance, cards and SMB lending each lose applicants at different stages. LumiqAI targets the stage where your funnel leaks most."</p>
        </section>
        <section class="section">
            <FunnelTabs initial=FunnelVertical::Auto/>
        </section>
        <section class="section section--alt">
            <h2 class="section__title">"Results across pilots"</h2>
            <MetricStrip set=MetricSet::Impact/>
        </section>
        <section class="section">
            <h2 class="section__title">"Why not keep what you have?"</h2>
            <CompetitorCards/>
        </section>
    }
}
