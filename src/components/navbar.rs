//! Site navigation with a checkbox-driven mobile menu.

use leptos::prelude::*;

use crate::state::auth::Session;

/// Top navigation bar.
///
/// The mobile menu is driven by a checkbox; clicking any nav link closes
/// it again, matching the original site's behavior.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Option<Session>>>();
    let menu_open = RwSignal::new(false);

    let close_menu = move |_| menu_open.set(false);
    let auth_label = move || {
        session
            .get()
            .map_or_else(|| "Login".to_owned(), |s| s.name)
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand" on:click=close_menu>
                "Murn Interiors"
            </a>
            <input
                type="checkbox"
                id="menu-toggle"
                class="menu-toggle-checkbox"
                prop:checked=move || menu_open.get()
                on:change=move |ev| menu_open.set(event_target_checked(&ev))
            />
            <label for="menu-toggle" class="menu-toggle" aria-label="Toggle menu">
                "\u{2630}"
            </label>
            <ul class="nav-links" class=("nav-links--open", move || menu_open.get())>
                <li><a href="/gallery" on:click=close_menu>"Gallery"</a></li>
                <li><a href="/about-us" on:click=close_menu>"About Us"</a></li>
                <li><a href="/enquiry" on:click=close_menu>"Enquiry"</a></li>
                <li><a href="/faq" on:click=close_menu>"FAQ"</a></li>
                <li><a href="/contact-us" on:click=close_menu>"Contact"</a></li>
                <li><a href="/login" on:click=close_menu>{auth_label}</a></li>
            </ul>
        </nav>
    }
}
