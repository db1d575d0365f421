//! Networking layer: HTTP client, ambient auth token, and wire types.

pub mod api;
pub mod error;
pub mod token;
pub mod types;
