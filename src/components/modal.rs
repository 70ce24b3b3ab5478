//! Shared modal dialog shell used by the login and register modals.

use leptos::prelude::*;

use crate::components::button::Button;

/// Overlay dialog with a titled header, a body, a primary action button,
/// and an optional footer. Visibility belongs to the caller; the backdrop
/// and the close control both invoke `on_close`. Closing while a
/// submission is in flight does not cancel it.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    title: &'static str,
    action_label: &'static str,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<()>,
    children: ChildrenFn,
    #[prop(into, optional)] footer: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <header class="modal__header">
                        <button class="modal__close" on:click=move |_| on_close.run(())>
                            "\u{2715}"
                        </button>
                        <span class="modal__title">{title}</span>
                    </header>
                    <div class="modal__body">{children()}</div>
                    <div class="modal__actions">
                        <Button label=action_label disabled=disabled on_click=on_submit/>
                    </div>
                    {footer.as_ref().map(ViewFn::run)}
                </div>
            </div>
        </Show>
    }
}
