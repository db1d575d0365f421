//! Routed pages, one module per route.

pub mod explorer;
pub mod home;
pub mod identify;
pub mod login;
pub mod not_found;
pub mod plant_detail;
pub mod plants;
pub mod signup;
