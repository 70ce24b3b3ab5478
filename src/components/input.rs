//! Labeled text input bound to a string signal.

use leptos::prelude::*;

#[component]
pub fn Input(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="input">
            <span class="input__label">{label}</span>
            <input
                class="input__field"
                type=input_type
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
