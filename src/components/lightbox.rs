//! Lightbox overlay: displays the open item and wires the controls.

use leptos::prelude::*;

use crate::state::lightbox::{LightboxGroups, LightboxState, key_action};

/// Modal image viewer over a set of prebuilt groups.
///
/// Clicking the backdrop (but not the content), the close control, or
/// pressing Escape closes it; the arrow controls and arrow keys navigate
/// with circular wrap. Keyboard input is ignored while closed.
#[component]
pub fn Lightbox(groups: LightboxGroups, state: RwSignal<LightboxState>) -> impl IntoView {
    let groups = StoredValue::new(groups);

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if !state.get_untracked().is_open() {
            return;
        }
        if let Some(action) = key_action(&ev.key()) {
            ev.prevent_default();
            state.update(|s| groups.with_value(|g| s.apply(action, g)));
        }
    });
    on_cleanup(move || handle.remove());

    let current = move || groups.with_value(|g| state.get().current(g).cloned());
    let close = move |_| state.update(LightboxState::close);
    let prev = move |_| state.update(|s| groups.with_value(|g| s.prev(g)));
    let next = move |_| state.update(|s| groups.with_value(|g| s.next(g)));

    view! {
        <Show when=move || state.get().is_open()>
            <div class="lightbox-backdrop" on:click=close>
                <div class="lightbox" on:click=|ev| ev.stop_propagation()>
                    <button class="lightbox__close" aria-label="Close" on:click=close>
                        "\u{00d7}"
                    </button>
                    <button class="lightbox__prev" aria-label="Previous image" on:click=prev>
                        "\u{2190}"
                    </button>
                    {move || {
                        current()
                            .map(|item| {
                                view! {
                                    <figure class="lightbox__figure">
                                        <img src=item.href.clone() alt=item.title.clone()/>
                                        <figcaption>{item.title}</figcaption>
                                    </figure>
                                }
                            })
                    }}
                    <button class="lightbox__next" aria-label="Next image" on:click=next>
                        "\u{2192}"
                    </button>
                </div>
            </div>
        </Show>
    }
}
