//! Single row in the user menu dropdown.

use leptos::prelude::*;

#[component]
pub fn MenuItem(label: &'static str, #[prop(into)] on_select: Callback<()>) -> impl IntoView {
    view! {
        <div class="user-menu__item" on:click=move |_| on_select.run(())>
            {label}
        </div>
    }
}
