//! UI components: navbar, user menu, auth modals, toasts, and the shared
//! form primitives they are built from.

pub mod avatar;
pub mod button;
pub mod heading;
pub mod input;
pub mod login_modal;
pub mod menu_item;
pub mod modal;
pub mod navbar;
pub mod register_modal;
pub mod toaster;
pub mod user_menu;
