//! Maud views. Each function renders one complete page from loaded content.

pub mod blog;
pub mod calendar;
pub mod gate;
pub mod home;
pub mod layout;
pub mod not_found;
pub mod pitches;

/// Site stylesheet served at `/style.css`.
pub const STYLESHEET: &str = include_str!("../../assets/style.css");
