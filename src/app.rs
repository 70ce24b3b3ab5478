//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::login_modal::LoginModal;
use crate::components::navbar::Navbar;
use crate::components::register_modal::RegisterModal;
use crate::components::toaster::Toaster;
use crate::pages::home::HomePage;
use crate::state::{auth::AuthState, modals::ModalsState, toasts::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, resolves the current user, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let modals = RwSignal::new(ModalsState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(modals);
    provide_context(ui);
    provide_context(toasts);

    // Resolve the current user once per page load, and again whenever a
    // successful login bumps the data epoch.
    #[cfg(feature = "hydrate")]
    {
        let epoch = Memo::new(move |_| ui.get().data_epoch);
        Effect::new(move || {
            epoch.track();
            leptos::task::spawn_local(async move {
                auth.update(|a| a.loading = true);
                let user = crate::net::api::fetch_current_user().await;
                auth.update(|a| {
                    a.user = user;
                    a.loading = false;
                });
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/roost-client.css"/>
        <Title text="Roost"/>

        <Toaster/>
        <RegisterModal/>
        <LoginModal/>
        <Navbar/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
