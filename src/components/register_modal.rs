//! Register modal: account form, Google sign-in, and the switch link to
//! the login modal.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::heading::Heading;
use crate::components::input::Input;
use crate::components::modal::Modal;
use crate::form::RegisterForm;
use crate::state::modals::{ModalKind, ModalsState};
use crate::state::session;
use crate::state::toasts::ToastState;

#[component]
pub fn RegisterModal() -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let in_flight = RwSignal::new(false);

    let on_close = Callback::new(move |()| modals.update(|m| m.close(ModalKind::Register)));

    let on_submit = Callback::new(move |()| {
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let mut prepared = None;
        toasts.update(|t| prepared = session::prepare_register(&form, t));
        let Some(payload) = prepared else {
            return;
        };
        #[cfg(feature = "hydrate")]
        session::spawn_register(payload, modals, toasts, in_flight);
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    });

    // Switch modals by explicitly closing this one and opening the other.
    let to_login = move |_| {
        modals.update(|m| {
            m.close(ModalKind::Register);
            m.open(ModalKind::Login);
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
                    <span>"Already have an account?"</span>
                    <span class="modal__switch-link" on:click=to_login>
                        "Log in"
                    </span>
                </div>
            </div>
        }
    });

    view! {
        <Modal
            is_open=Signal::derive(move || modals.get().is_open(ModalKind::Register))
            disabled=in_flight
            title="Register"
            action_label="Continue"
            on_close=on_close
            on_submit=on_submit
            footer=footer
        >
            <Heading title="Welcome to Roost" subtitle="Create an account!"/>
            <Input label="Email" input_type="email" value=email disabled=in_flight/>
            <Input label="Name" value=name disabled=in_flight/>
            <Input label="Password" input_type="password" value=password disabled=in_flight/>
        </Modal>
    }
}
