//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast::ToastHost;
use crate::pages::{
    about::AboutPage, auth::AuthPage, contact::ContactPage, enquiry::EnquiryPage, faq::FaqPage,
    gallery::GalleryPage, home::HomePage,
};
use crate::state::auth::Session;
use crate::state::toast::ToastState;
use crate::util::storage;

/// Root application component.
///
/// Provides the shared toast and session contexts and sets up client-side
/// routing. Every other component owns its own state; nothing else is shared.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    let session = RwSignal::new(storage::load_session());

    provide_context(toasts);
    provide_context::<RwSignal<Option<Session>>>(session);

    view! {
        <Stylesheet id="leptos" href="/assets/site.css"/>
        <Title text="Murn Interiors"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("gallery") view=GalleryPage/>
                    <Route path=StaticSegment("about-us") view=AboutPage/>
                    <Route path=StaticSegment("contact-us") view=ContactPage/>
                    <Route path=StaticSegment("enquiry") view=EnquiryPage/>
                    <Route path=StaticSegment("faq") view=FaqPage/>
                    <Route path=StaticSegment("login") view=AuthPage/>
                </Routes>
            </main>
            <Footer/>
            <ToastHost/>
        </Router>
    }
}
