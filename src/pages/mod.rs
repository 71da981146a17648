//! One component per page the root view can render.

pub mod home;
pub mod login;
pub mod notifications;
pub mod orders;
pub mod product;
pub mod profile;
pub mod register;
