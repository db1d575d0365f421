//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is a single `RwSignal<AuthState>` owned by the composition
//! root and handed to readers via Leptos context. Mutation happens only
//! through the operations in `auth`, so every change completes atomically
//! between UI yield points; overlapping login attempts resolve
//! last-write-wins.

pub mod auth;
