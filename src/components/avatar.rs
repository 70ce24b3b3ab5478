//! Circular user avatar.

use leptos::prelude::*;

const PLACEHOLDER: &str = "/images/avatar-placeholder.jpg";

/// Avatar image; falls back to the bundled placeholder when the user has
/// no image (or is anonymous).
#[component]
pub fn Avatar(src: Option<String>) -> impl IntoView {
    view! {
        <img
            class="avatar"
            height="30"
            width="30"
            alt="User avatar"
            src=src.unwrap_or_else(|| PLACEHOLDER.to_owned())
        />
    }
}
