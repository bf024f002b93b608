//! FAQ accordion: question headers toggling answer panels.

use leptos::prelude::*;

use crate::state::accordion::AccordionState;

/// One question/answer pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Accordion list where at most one answer is open at a time.
#[component]
pub fn Accordion(entries: Vec<AccordionEntry>) -> impl IntoView {
    let state = RwSignal::new(AccordionState::default());

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            view! {
                <div class="faq-item" class=("faq-item--open", move || state.get().is_open(index))>
                    <h3 class="faq-item__question" on:click=move |_| state.update(|s| s.toggle(index))>
                        {entry.question}
                    </h3>
                    <p
                        class="faq-item__answer"
                        style:display=move || if state.get().is_open(index) { "block" } else { "none" }
                    >
                        {entry.answer}
                    </p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="faq-list">{items}</div> }
}
