/// Platform collaborators
///
/// Narrow interfaces over what the operating system provides:
/// - Choosing a photo (picker.rs)
/// - Handing a photo to another application (share.rs)

pub mod picker;
pub mod share;

pub use picker::{DialogPicker, ImagePicker, Permission};
pub use share::{Share, SystemShare, JPEG_MIME};
