//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use content::ContentRegistry;
use content::routes::SiteRoute;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::config::DeliveryConfig;
use crate::net::emailjs::DeliveryChoice;
use crate::pages::{
    case_study::CaseStudyPage, contact::ContactPage, features::FeaturesPage, home::HomePage, home::LandingPage,
    how_it_works::HowItWorksPage, not_found::NotFoundPage, pilot::PilotPage, security::SecurityPage,
    solutions::SolutionsPage,
};

/// Root application component.
///
/// Provides the read-only content registry and the contact relay, then sets
/// up client-side routing inside the shared header/footer shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = DeliveryConfig::from_build_env();
    if let Err(err) = &config {
        leptos::logging::warn!("contact relay unavailable: {err}");
    }
    provide_context(ContentRegistry::lumiq());
    provide_context(DeliveryChoice::Relay(config));

    view! {
        <Title formatter=|text: String| format!("{text} · LumiqAI")/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment(SiteRoute::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(SiteRoute::Landing.segment()) view=LandingPage/>
                    <Route path=StaticSegment(SiteRoute::Solutions.segment()) view=SolutionsPage/>
                    <Route path=StaticSegment(SiteRoute::Features.segment()) view=FeaturesPage/>
                    <Route path=StaticSegment(SiteRoute::HowItWorks.segment()) view=HowItWorksPage/>
                    <Route path=StaticSegment(SiteRoute::Security.segment()) view=SecurityPage/>
                    <Route path=StaticSegment(SiteRoute::CaseStudy.segment()) view=CaseStudyPage/>
                    <Route path=StaticSegment(SiteRoute::Pilot.segment()) view=PilotPage/>
                    <Route path=StaticSegment(SiteRoute::Contact.segment()) view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
