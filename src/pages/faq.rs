//! FAQ page.

use leptos::prelude::*;

use crate::components::accordion::{Accordion, AccordionEntry};

const FAQ: &[(&str, &str)] = &[
    (
        "How long does a custom piece take?",
        "Most commissions take six to ten weeks from deposit to delivery, depending on the timber and the finish.",
    ),
    (
        "Which timbers do you work with?",
        "Mainly white oak, walnut, kiaat, and reclaimed oregon pine. We source yellowwood for traditional pieces when it is available.",
    ),
    (
        "Do you deliver outside Cape Town?",
        "Yes. We deliver nationwide through a specialist furniture courier; delivery is quoted per piece.",
    ),
    (
        "Can you match an existing piece?",
        "Usually. Bring the piece in, or send clear photographs and measurements with your enquiry.",
    ),
    (
        "What does the guarantee cover?",
        "Every piece carries a five-year guarantee on workmanship and joinery. Natural movement of solid wood is not a defect.",
    ),
];

#[component]
pub fn FaqPage() -> impl IntoView {
    let entries = FAQ
        .iter()
        .map(|&(question, answer)| AccordionEntry { question, answer })
        .collect::<Vec<_>>();

    view! {
        <section class="faq-page">
            <h1>"Frequently Asked Questions"</h1>
            <Accordion entries=entries/>
        </section>
    }
}
