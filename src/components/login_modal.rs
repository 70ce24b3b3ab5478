//! Login modal: credential form, Google sign-in, and the switch link to
//! the register modal.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::heading::Heading;
use crate::components::input::Input;
use crate::components::modal::Modal;
use crate::form::LoginForm;
use crate::state::modals::{ModalKind, ModalsState};
use crate::state::session;
use crate::state::toasts::ToastState;
use crate::state::ui::UiState;

#[component]
pub fn LoginModal() -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let in_flight = RwSignal::new(false);

    let on_close = Callback::new(move |()| modals.update(|m| m.close(ModalKind::Login)));

    let on_submit = Callback::new(move |()| {
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let mut prepared = None;
        toasts.update(|t| prepared = session::prepare_login(&form, t));
        let Some(credentials) = prepared else {
            return;
        };
        #[cfg(feature = "hydrate")]
        session::spawn_login(credentials, modals, ui, toasts, in_flight);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            let _ = ui;
        }
    });

    // Switch modals by explicitly closing this one and opening the other.
    let to_register = move |_| {
        modals.update(|m| {
            m.close(ModalKind::Login);
            m.open(ModalKind::Register);
        });
    };

    let footer = ViewFn::from(move || {
        view! {
            <div class="modal__footer">
                <Button
                    label="Continue With Google"
                    outline=true
                    disabled=in_flight
                    on_click=Callback::new(|()| crate::net::api::sign_in_google())
                />
                <div class="modal__switch">
                    <span>"First time using Roost?"</span>
                    <span class="modal__switch-link" on:click=to_register>
                        "Create an account"
                    </span>
                </div>
            </div>
        }
    });

    view! {
        <Modal
            is_open=Signal::derive(move || modals.get().is_open(ModalKind::Login))
            disabled=in_flight
            title="Login"
            action_label="Continue"
            on_close=on_close
            on_submit=on_submit
            footer=footer
        >
            <Heading title="Welcome back" subtitle="Login to your account!"/>
            <Input label="Email" input_type="email" value=email disabled=in_flight/>
            <Input label="Password" input_type="password" value=password disabled=in_flight/>
        </Modal>
    }
}
