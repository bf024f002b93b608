//! Site footer with the auto-filled year.

use leptos::prelude::*;

/// Current full year from the browser clock, empty outside the browser.
fn year_text() -> String {
    #[cfg(feature = "csr")]
    {
        let year = js_sys::Date::new_0().get_full_year();
        year.to_string()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>
                "\u{00a9} " <span id="year">{year_text()}</span> " Murn Interiors. All rights reserved."
            </p>
        </footer>
    }
}
