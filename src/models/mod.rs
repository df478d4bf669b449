//! Configuration models for the artist client.

pub mod config;
