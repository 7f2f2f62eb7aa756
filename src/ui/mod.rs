/// User interface module
///
/// Screens:
/// - Calendar with date-linked preview (calendar_screen.rs)
/// - Upload (upload.rs)
/// - Progress history (gallery.rs)
///
/// Shared pieces: the month grid canvas, the preview modal and notices.

pub mod calendar;
pub mod calendar_screen;
pub mod gallery;
pub mod notice;
pub mod preview;
pub mod upload;
