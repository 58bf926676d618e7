//! Core utilities shared across the crate.

pub mod cache;

pub use cache::{league_meta_path, token_path, try_read_to_string, write_string};
