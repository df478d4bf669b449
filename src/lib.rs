//! Client-side artist list view for the AI Artist Database.
//!
//! The whole artist collection is fetched once from the Artist Data API and
//! then filtered and paged locally. [`domain::view_state::ViewState`] holds the
//! pure state machine; [`services::artists::ArtistListView`] binds it to a
//! repository.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod pagination;

#[cfg(feature = "client")]
pub mod forms;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod repository;
#[cfg(feature = "client")]
pub mod services;
