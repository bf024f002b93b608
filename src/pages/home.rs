//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Handmade furniture, built to last"</h1>
            <p>
                "Murn Interiors designs and builds solid-wood furniture from our "
                "Cape Town workshop. Browse the gallery, meet the team, or send "
                "us an enquiry for a custom piece."
            </p>
            <div class="hero__actions">
                <a href="/gallery" class="btn btn--primary">"View the gallery"</a>
                <a href="/enquiry" class="btn">"Request a quote"</a>
            </div>
        </section>
    }
}
