//! Landing page.
//!
//! Listing search and booking live server-side and are not part of this
//! client; the page only greets the resolved user and re-renders when the
//! data epoch changes (e.g. after a login).

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let greeting = move || {
        // Reading the epoch ties this view to login-triggered refreshes.
        let _ = ui.get().data_epoch;
        auth.get().user.map_or_else(
            || "Find your next stay".to_owned(),
            |user| format!("Welcome back, {}", user.name),
        )
    };

    view! {
        <main class="home">
            <h1 class="home__greeting">{greeting}</h1>
        </main>
    }
}
