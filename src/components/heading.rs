//! Modal body heading with optional subtitle.

use leptos::prelude::*;

#[component]
pub fn Heading(
    title: &'static str,
    #[prop(optional, into)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="heading">
            <h2 class="heading__title">{title}</h2>
            {subtitle.map(|s| view! { <p class="heading__subtitle">{s}</p> })}
        </div>
    }
}
