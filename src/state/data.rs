/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the progress library and the UI layer.
use std::path::PathBuf;

use super::date::DateId;

/// Represents a single progress photo in the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEntry {
    /// Filename only (e.g., "2024-06-15.jpg")
    pub filename: String,
    /// Full path to the photo
    pub path: PathBuf,
    /// Day the photo belongs to, if the filename follows the date convention
    pub date: Option<DateId>,
}

impl ProgressEntry {
    pub fn new(filename: String, path: PathBuf) -> Self {
        let date = DateId::from_filename(&filename);
        Self {
            filename,
            path,
            date,
        }
    }
}

/// Outcome of looking up the photo for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The progress directory has never been created
    NoLibrary,
    /// The directory exists but holds nothing for this day
    Missing,
    /// The photo for this day
    Found(PathBuf),
}
