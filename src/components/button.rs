//! Primary/outline action button.

use leptos::prelude::*;

/// Full-width button used by the modals. `disabled` is a signal so the
/// in-flight flag can grey it out while a submission is pending.
#[component]
pub fn Button(
    label: &'static str,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(optional)] outline: bool,
    #[prop(optional)] small: bool,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let class = if outline { "btn btn--outline" } else { "btn btn--primary" };

    view! {
        <button
            class=class
            class:btn--small=small
            prop:disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {label}
        </button>
    }
}
