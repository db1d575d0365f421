//! # plantasy
//!
//! Leptos + WASM single-page client for the Plantasy plant-collection
//! application: identify plants from photos, keep a personal collection,
//! and browse community finds against an external REST backend.
//!
//! The session (bearer token + user profile) lives in a single
//! context-provided signal owned by [`app::App`]; the `net` layer wraps
//! `gloo-net` with base-URL resolution, token injection, and error
//! normalization; gated routes sit behind the `RequireAuth` parent route.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
