//! Login/register page backed by localStorage. A demo, not a security
//! boundary: see [`crate::state::auth`].

use leptos::prelude::*;

use crate::components::toast::show_toast;
use crate::state::auth::{self, RegisterOutcome, Session};
use crate::state::toast::ToastState;
use crate::util::storage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthTab {
    #[default]
    Login,
    Register,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = expect_context::<RwSignal<Option<Session>>>();
    let tab = RwSignal::new(AuthTab::Login);

    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let reg_name = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let users = storage::load_users();
        let email = login_email.get_untracked();
        let password = login_password.get_untracked();
        match auth::login(&users, &email, &password) {
            Some(record) => {
                storage::save_session(&record);
                show_toast(toasts, format!("Logged in as {}", record.name));
                session.set(Some(record));
                login_email.set(String::new());
                login_password.set(String::new());
            }
            None => show_toast(toasts, "Invalid credentials"),
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut users = storage::load_users();
        let name = reg_name.get_untracked();
        let email = reg_email.get_untracked();
        let password = reg_password.get_untracked();
        match auth::register(&mut users, &name, &email, &password) {
            RegisterOutcome::Registered => {
                storage::save_users(&users);
                show_toast(toasts, "Registration successful — please log in");
                reg_name.set(String::new());
                reg_email.set(String::new());
                reg_password.set(String::new());
                tab.set(AuthTab::Login);
            }
            RegisterOutcome::EmptyField => show_toast(toasts, "Complete all fields to register"),
            RegisterOutcome::AlreadyRegistered => show_toast(toasts, "Email already registered"),
        }
    };

    let on_logout = move |_| {
        storage::clear_session();
        session.set(None);
    };

    view! {
        <section class="auth-page">
            <h1>"Account"</h1>

            <Show when=move || session.get().is_some()>
                <p class="auth-page__session">
                    {move || {
                        session
                            .get()
                            .map(|s| format!("Logged in as {} ({})", s.name, s.email))
                    }}
                    <button class="btn auth-page__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </p>
            </Show>

            <div class="auth-tabs">
                <button
                    id="loginTab"
                    class="auth-tab"
                    class:active=move || tab.get() == AuthTab::Login
                    on:click=move |_| tab.set(AuthTab::Login)
                >
                    "Login"
                </button>
                <button
                    id="registerTab"
                    class="auth-tab"
                    class:active=move || tab.get() == AuthTab::Register
                    on:click=move |_| tab.set(AuthTab::Register)
                >
                    "Register"
                </button>
            </div>

            <form
                id="loginForm"
                class="auth-form"
                class:hidden=move || tab.get() != AuthTab::Login
                on:submit=on_login
            >
                <label for="login-email">"Email"</label>
                <input
                    id="login-email"
                    name="login-email"
                    type="email"
                    prop:value=move || login_email.get()
                    on:input=move |ev| login_email.set(event_target_value(&ev))
                />
                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    name="login-password"
                    type="password"
                    prop:value=move || login_password.get()
                    on:input=move |ev| login_password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">"Log in"</button>
            </form>

            <form
                id="registerForm"
                class="auth-form"
                class:hidden=move || tab.get() != AuthTab::Register
                on:submit=on_register
            >
                <label for="reg-name">"Name"</label>
                <input
                    id="reg-name"
                    name="reg-name"
                    type="text"
                    prop:value=move || reg_name.get()
                    on:input=move |ev| reg_name.set(event_target_value(&ev))
                />
                <label for="reg-email">"Email"</label>
                <input
                    id="reg-email"
                    name="reg-email"
                    type="email"
                    prop:value=move || reg_email.get()
                    on:input=move |ev| reg_email.set(event_target_value(&ev))
                />
                <label for="reg-password">"Password"</label>
                <input
                    id="reg-password"
                    name="reg-password"
                    type="password"
                    prop:value=move || reg_password.get()
                    on:input=move |ev| reg_password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">"Create account"</button>
            </form>
        </section>
    }
}
