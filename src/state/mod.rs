/// State management module
///
/// This module handles all application state, including:
/// - Calendar identifiers and month arithmetic (date.rs)
/// - Month paging from drag gestures (navigator.rs)
/// - The selected calendar day (selector.rs)
/// - The directory of progress photos (library.rs)
/// - Shared data structures (data.rs)

pub mod data;
pub mod date;
pub mod library;
pub mod navigator;
pub mod selector;
