//! Validated form with inline errors and a simulated send.

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::state::form::FormState;
use crate::state::toast::ToastState;
use crate::state::validate::{FieldKind, FieldSpec};

/// A form whose fields validate on input, blur, and submit.
///
/// Submission never leaves the page: an invalid form focuses its first
/// invalid field, a valid one shows `success_message` and resets after a
/// short delay, simulating an asynchronous send.
#[component]
pub fn ValidatedForm(
    id: &'static str,
    specs: Vec<FieldSpec>,
    submit_label: &'static str,
    success_message: &'static str,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(FormState::new(specs.clone()));

    let rows = specs
        .iter()
        .enumerate()
        .map(|(index, spec)| field_row(id, index, *spec, form))
        .collect::<Vec<_>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut ok = false;
        form.update(|f| ok = f.validate_all());

        if ok {
            show_toast(toasts, success_message);
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let delay = std::time::Duration::from_millis(crate::state::form::RESET_DELAY_MS);
                gloo_timers::future::sleep(delay).await;
                form.update(FormState::reset);
            });
        } else if let Some(name) =
            form.with_untracked(|f| f.first_invalid().map(|i| f.fields[i].spec.name))
        {
            focus_field(&format!("{id}-{name}"));
        }
    };

    view! {
        <form id=id class="validated-form" novalidate=true on:submit=on_submit>
            {rows}
            <button type="submit" class="btn btn--primary">
                {submit_label}
            </button>
        </form>
    }
}

/// Render one labelled field with its inline error slot.
fn field_row(
    form_id: &'static str,
    index: usize,
    spec: FieldSpec,
    form: RwSignal<FormState>,
) -> impl IntoView {
    let field_id = format!("{form_id}-{}", spec.name);
    let value = move || form.with(|f| f.fields[index].value.clone());
    let invalid = move || form.with(|f| f.fields[index].error.is_some());
    let error = move || {
        form.with(|f| f.fields[index].error)
            .map(|msg| view! { <div class="field-error">{msg}</div> })
    };
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set_value(index, event_target_value(&ev)));
    };
    let on_blur = move |_: leptos::ev::FocusEvent| form.update(|f| f.blur(index));

    let control = if spec.kind == FieldKind::Message {
        view! {
            <textarea
                id=field_id.clone()
                name=spec.name
                rows=5
                prop:value=value
                class:invalid=invalid
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field_id.clone()
                name=spec.name
                type=input_type(spec.kind)
                prop:value=value
                class:invalid=invalid
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <label class="validated-form__label" for=field_id.clone()>
            {spec.label}
        </label>
        {control}
        {error}
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Phone => "tel",
        FieldKind::Password => "password",
        FieldKind::Text | FieldKind::Message => "text",
    }
}

/// Move focus to the element with `id`, if it exists.
fn focus_field(id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));
        if let Some(element) = element {
            if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
