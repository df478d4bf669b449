//! DTOs that bridge the view state with whatever renders it.

pub mod artists;
