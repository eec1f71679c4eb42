//! Core types for the folio site.
//!
//! This crate holds everything the site knows without speaking HTTP:
//! - `event` and `fixture` for the calendar events and their validated loading
//! - `calendar` for current-location resolution, the upcoming list and month grids
//! - `gate` for the calendar passphrase check and the per-visitor session flag
//! - `blog`, `pitch` and `meta` for the bundled page content
//! - `config` and `site` for layered configuration and the loaded content bundle

pub mod blog;
pub mod calendar;
pub mod config;
pub mod date_range;
pub mod error;
pub mod event;
pub mod fixture;
pub mod gate;
pub mod markdown;
pub mod meta;
pub mod pitch;
pub mod site;
mod utils;

pub use error::{FolioError, FolioResult};
pub use event::{Display, Event};
pub use site::Site;
