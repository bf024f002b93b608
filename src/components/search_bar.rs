//! Search input driving a card filter.

use leptos::prelude::*;

/// Text input bound to a filter query signal.
#[component]
pub fn SearchBar(id: &'static str, placeholder: &'static str, query: RwSignal<String>) -> impl IntoView {
    view! {
        <input
            id=id
            class="search-bar"
            type="search"
            placeholder=placeholder
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
        />
    }
}
