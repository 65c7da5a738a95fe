//! Home page and its `/landing` variant.

use leptos::prelude::*;
use leptos_meta::Title;

use content::metrics::MetricSet;
use content::routes::SiteRoute;

use crate::components::competitor_cards::CompetitorCards;
use crate::components::count_up::MetricStrip;
use crate::components::funnel_tabs::FunnelTabs;
use crate::components::process_steps::ProcessSteps;

#[component]
fn Hero(eyebrow: &'static str, headline: &'static str, lede: &'static str) -> impl IntoView {
    view! {
        <section class="hero">
            <p class="hero__eyebrow">{eyebrow}</p>
            <h1 class="hero__headline">{headline}</h1>
            <p class="hero__lede">{lede}</p>
            <div class="hero__actions">
                <a class="button button--primary" href=SiteRoute::Pilot.path()>"Apply for the pilot"</a>
                <a class="button button--ghost" href=SiteRoute::HowItWorks.path()>"See how it works"</a>
            </div>
            <MetricStrip set=MetricSet::Hero/>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Home.title()/>
        <Hero
            eyebrow="LumiqAI × Santander"
            headline="Approve the customers your scorecard cannot see."
            lede="Alternative-data credit scoring that lifts approvals for thin-file applicants without adding risk."
        />
        <section class="section">
            <h2 class="section__title">"The applicants you are losing today"</h2>
            <p class="section__lede">"Pick a lending vertical to see where applications drop out and what LumiqAI can bring back."</p>
            <FunnelTabs/>
        </section>
        <section class="section section--alt">
            <h2 class="section__title">"Measured impact"</h2>
            <MetricStrip set=MetricSet::Impact/>
        </section>
        <section class="section">
            <h2 class="section__title">"How LumiqAI compares"</h2>
            <CompetitorCards/>
        </section>
        <CallToAction/>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Landing.title()/>
        <Hero
            eyebrow="90-day shadow pilot"
            headline="Prove the lift on your own book before a single live decision changes."
            lede="LumiqAI scores every application alongside your current model, then reports approvals, losses and reason codes side by side."
        />
        <section class="section">
            <h2 class="section__title">"Four steps from data to decision"</h2>
            <ProcessSteps/>
        </section>
        <CallToAction/>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <h2 class="cta__title">"Ready to see it on your portfolio?"</h2>
            <p class="cta__lede">"Pilot slots for the next quarter are limited."</p>
            <div class="cta__actions">
                <a class="button button--primary" href=SiteRoute::Pilot.path()>"Apply for the pilot"</a>
                <a class="button button--ghost" href=SiteRoute::Contact.path()>"Talk to our team"</a>
            </div>
        </section>
    }
}
