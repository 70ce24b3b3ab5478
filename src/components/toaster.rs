//! Toast overlay rendering the active notifications.
//!
//! Auto-dismiss runs only in the browser: each newly queued toast gets a
//! local timer task that removes it after its display duration.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        use std::collections::HashSet;

        // Handles already given a dismissal timer; replacement toasts get
        // fresh handles so they are re-scheduled.
        let scheduled = StoredValue::new(HashSet::<u64>::new());
        Effect::new(move || {
            for toast in toasts.get().active() {
                let handle = toast.handle;
                let duration = toast.duration_ms;
                let mut fresh = false;
                scheduled.update_value(|s| fresh = s.insert(handle));
                if !fresh {
                    continue;
                }
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(duration).await;
                    toasts.update(|t| t.dismiss(handle));
                });
            }
        });
    }

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .active()
                    .iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! { <div class=class>{toast.message.clone()}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
