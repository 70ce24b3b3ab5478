//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `modals`, `toasts`, etc.) so
//! individual components can depend on small focused models. Each model is
//! a plain struct held in an `RwSignal` provided via context; the flow
//! logic in `session` mutates them through `&mut` so it stays unit-testable
//! off the wasm target.

pub mod auth;
pub mod modals;
pub mod session;
pub mod toasts;
pub mod ui;
