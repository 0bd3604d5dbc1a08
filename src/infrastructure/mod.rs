//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`; this layer maps user paths
//! and the plugin's data directory onto it.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
