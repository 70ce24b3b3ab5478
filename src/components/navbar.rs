//! Top navigation bar with logo, host link, and the user menu.

use leptos::prelude::*;

use crate::components::user_menu::UserMenu;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar__logo" href="/">
                "Roost"
            </a>
            <div class="navbar__actions">
                <div class="navbar__host">"Roost your home"</div>
                <UserMenu/>
            </div>
        </nav>
    }
}
