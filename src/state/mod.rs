//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! `session` is the one app-wide record (route + who is signed in);
//! `access` decides what the root renders from it. The remaining modules
//! are page-level view models that hold no session data of their own.

pub mod access;
pub mod auth;
pub mod feed;
pub mod notifications;
pub mod orders;
pub mod product;
pub mod session;
pub mod toast;
pub mod ui;
