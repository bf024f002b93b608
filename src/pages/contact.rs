//! Contact page: validated form, live clock, and the map embed.

use leptos::prelude::*;

use crate::components::clock::Clock;
use crate::components::form::ValidatedForm;
use crate::state::validate::{FieldKind, FieldSpec};
use crate::util::map::{self, MapConfig};

const WORKSHOP_MAP: MapConfig = MapConfig {
    lat: -33.9249,
    lng: 18.4241,
    zoom: 15.0,
    title: "Murn Interiors workshop",
};

fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "Your name", true, FieldKind::Text),
        FieldSpec::new("email", "Email address", true, FieldKind::Email),
        FieldSpec::new("phone", "Phone (optional)", false, FieldKind::Phone),
        FieldSpec::new("message", "Message", true, FieldKind::Message),
    ]
}

#[component]
pub fn ContactPage() -> impl IntoView {
    // Runs once after the container is in the document.
    Effect::new(move || {
        map::embed("contact-map", &WORKSHOP_MAP);
    });

    view! {
        <section class="contact-page">
            <h1>"Contact Us"</h1>
            <p>"Workshop hours: Monday to Friday, 08:00 to 17:00."</p>
            <Clock/>

            <ValidatedForm
                id="contact-form"
                specs=contact_fields()
                submit_label="Send message"
                success_message="Submission successful — we will respond shortly."
            />

            <h2>"Find the workshop"</h2>
            <div id="contact-map" class="map-embed"></div>
        </section>
    }
}
