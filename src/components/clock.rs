//! Live clock for the contact page.

use leptos::prelude::*;

/// Current local date-time in the platform's default locale format.
#[cfg(feature = "csr")]
fn local_time_text() -> String {
    let formatted = js_sys::Date::new_0()
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED);
    String::from(formatted)
}

/// Renders the current local time, repainted every second.
///
/// The interval is wall-clock based with no drift correction; a tick may
/// be skipped under load. The tick task stops when the component is
/// removed.
#[component]
pub fn Clock() -> impl IntoView {
    let now = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        let alive = Rc::new(Cell::new(true));
        on_cleanup({
            let alive = Rc::clone(&alive);
            move || alive.set(false)
        });

        leptos::task::spawn_local(async move {
            while alive.get() {
                now.set(local_time_text());
                gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
            }
        });
    }

    view! {
        <p id="current-time" class="clock">
            {move || now.get()}
        </p>
    }
}
