//! Shared toast element and the helper that shows a message on it.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Show a transient message on the shared toast element.
///
/// Overlapping calls overwrite the text; the generation counter in
/// [`ToastState`] makes the newest call own the fade timer.
pub fn show_toast(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    let message = message.into();
    let mut generation = 0;
    toasts.update(|t| generation = t.show(message));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let delay = std::time::Duration::from_millis(crate::state::toast::TOAST_FADE_MS);
        gloo_timers::future::sleep(delay).await;
        toasts.update(|t| t.clear(generation));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = generation;
    }
}

/// The single shared notification element, rendered once by `App`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let text = move || toasts.get().message.unwrap_or_default();
    let opacity = move || if toasts.get().message.is_some() { "1" } else { "0" };

    view! {
        <div id="site-toast" class="site-toast" style:opacity=opacity>
            {text}
        </div>
    }
}
