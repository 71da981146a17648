//! Data the views consume: record types, fixtures, and the simulated API.

pub mod fixtures;
pub mod mock_api;
pub mod types;
