use rfd::FileDialog;
use std::fmt::Debug;
use std::path::PathBuf;

/// Image extensions offered by the picker dialog
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif", "tif", "tiff"];

/// Answer to a photo library access request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Source of user-chosen photos
pub trait ImagePicker: Debug + Send + Sync {
    /// Ask for access to the user's photos
    fn request_permission(&self) -> Permission;

    /// Let the user choose one photo. `None` when the dialog is cancelled.
    fn browse(&self) -> Option<PathBuf>;
}

/// Picks photos with the native file dialog
#[derive(Debug, Default)]
pub struct DialogPicker;

impl ImagePicker for DialogPicker {
    fn request_permission(&self) -> Permission {
        // Native dialogs run with the user's own file access
        Permission::Granted
    }

    fn browse(&self) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Select Progress Photo")
            .add_filter("Images", IMAGE_EXTENSIONS);

        if let Some(pictures) = dirs::picture_dir() {
            dialog = dialog.set_directory(pictures);
        }

        dialog.pick_file()
    }
}
