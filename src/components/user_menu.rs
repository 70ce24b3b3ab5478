//! Navbar user menu: avatar trigger plus the account action dropdown.
//!
//! The dropdown branches on the presence of the current user. Anonymous
//! visitors get Login / Sign up, each of which opens its modal and closes
//! the menu in the same click.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::menu_item::MenuItem;
use crate::state::auth::AuthState;
use crate::state::modals::{ModalKind, ModalsState};
use crate::state::session;
use crate::state::ui::UiState;

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modals = expect_context::<RwSignal<ModalsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let toggle = move |_| ui.update(UiState::toggle_menu);

    let open_modal = move |kind: ModalKind| {
        modals.update(|m| ui.update(|u| session::open_auth_modal(kind, m, u)));
    };
    let on_login = Callback::new(move |()| open_modal(ModalKind::Login));
    let on_sign_up = Callback::new(move |()| open_modal(ModalKind::Register));

    let on_logout = Callback::new(move |()| {
        ui.update(UiState::close_menu);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::sign_out().await;
            auth.update(|a| a.user = None);
        });
    });

    view! {
        <div class="user-menu">
            <button class="user-menu__trigger" on:click=toggle>
                <span class="user-menu__burger">"\u{2630}"</span>
                {move || view! { <Avatar src=auth.get().user.and_then(|u| u.image)/> }}
            </button>
            <Show when=move || ui.get().menu_open>
                <div class="user-menu__dropdown">
                    {move || {
                        if auth.get().is_anonymous() {
                            view! {
                                <div class="user-menu__list">
                                    <MenuItem label="Login" on_select=on_login/>
                                    <MenuItem label="Sign up" on_select=on_sign_up/>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="user-menu__list">
                                    <MenuItem label="My Trips" on_select=Callback::new(|()| {})/>
                                    <MenuItem label="My Favorites" on_select=Callback::new(|()| {})/>
                                    <MenuItem label="My Properties" on_select=Callback::new(|()| {})/>
                                    <MenuItem label="Roost your home" on_select=Callback::new(|()| {})/>
                                    <hr/>
                                    <MenuItem label="Logout" on_select=on_logout/>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
