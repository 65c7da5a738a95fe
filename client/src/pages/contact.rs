//! Contact page.

use leptos::prelude::*;
use leptos_meta::Title;

use content::routes::SiteRoute;

use crate::components::lead_form::ContactForm;
use crate::net::delivery::FALLBACK_CONTACT;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Contact.title()/>
        <section class="page-hero">
            <h1>"Talk to the LumiqAI team"</h1>
            <p>"Tell us about your portfolio and we will set up a walkthrough with your credit-risk team."</p>
        </section>
        <section class="section section--split">
            <ContactForm/>
            <aside class="contact-aside">
                <h2>"Prefer email?"</h2>
                <a href=format!("mailto:{FALLBACK_CONTACT}")>{FALLBACK_CONTACT}</a>
                <p>"Madrid · London · Lisbon"</p>
            </aside>
        </section>
    }
}
