//! Gym Progress: a daily progress photo journal.
//!
//! Photos are stored one per day as `YYYY-MM-DD.jpg` in a single
//! directory. The calendar, upload and history screens all reach that
//! directory through [`state::library::ProgressLibrary`].

pub mod config;
pub mod error;
pub mod photo;
pub mod platform;
pub mod state;
pub mod ui;
