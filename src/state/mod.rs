//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the record the session manager drives and the view tree
//! reads; `ui` is purely presentational shell state.

pub mod session;
pub mod ui;
