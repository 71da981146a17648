//! Browser and formatting helpers.

pub mod dark_mode;
pub mod format;
pub mod task;
