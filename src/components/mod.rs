//! Reusable view pieces shared by pages.

pub mod auth_forms;
pub mod header;
pub mod mobile_menu;
pub mod order_detail;
pub mod post_card;
pub mod register_prompt;
pub mod toaster;
