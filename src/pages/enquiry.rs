//! Enquiry page: order calculator plus a validated enquiry form.

use leptos::prelude::*;

use crate::components::form::ValidatedForm;
use crate::state::calc::{format_amount, parse_amount, summary, total};
use crate::state::validate::{FieldKind, FieldSpec};

fn enquiry_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "Your name", true, FieldKind::Text),
        FieldSpec::new("email", "Email address", true, FieldKind::Email),
        FieldSpec::new("phone", "Phone (optional)", false, FieldKind::Phone),
        FieldSpec::new("details", "What would you like built?", true, FieldKind::Message),
    ]
}

#[component]
pub fn EnquiryPage() -> impl IntoView {
    let quantity = RwSignal::new("1".to_owned());
    let unit_price = RwSignal::new(String::new());

    // Recomputed on every input on either field, and once at first render.
    let amounts = move || {
        let qty = quantity.with(|q| parse_amount(q));
        let unit = unit_price.with(|u| parse_amount(u));
        (qty, unit)
    };
    let total_text = move || {
        let (qty, unit) = amounts();
        format_amount(total(qty, unit))
    };
    let summary_text = move || {
        let (qty, unit) = amounts();
        summary(qty, unit)
    };

    view! {
        <section class="enquiry-page">
            <h1>"Enquiry"</h1>

            <div class="enquiry-calc">
                <h2>"Estimate your order"</h2>
                <label for="eq-qty">"Quantity"</label>
                <input
                    id="eq-qty"
                    type="number"
                    min=0
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
                <label for="eq-unit-price">"Unit price (R)"</label>
                <input
                    id="eq-unit-price"
                    type="number"
                    min=0
                    step="0.01"
                    prop:value=move || unit_price.get()
                    on:input=move |ev| unit_price.set(event_target_value(&ev))
                />
                <p>
                    "Total: R" <span id="eq-total">{total_text}</span>
                </p>
                <p id="eq-overall" class="enquiry-calc__summary">
                    {summary_text}
                </p>
            </div>

            <ValidatedForm
                id="enquiry-form"
                specs=enquiry_fields()
                submit_label="Send enquiry"
                success_message="Enquiry sent — we will be in touch with a quote."
            />
        </section>
    }
}
