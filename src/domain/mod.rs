//! Domain types and the pure artist list view state.

pub mod artist;
pub mod filter;
pub mod types;
pub mod view_state;
