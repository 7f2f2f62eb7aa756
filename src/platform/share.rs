use std::fmt::Debug;
use std::path::Path;

use crate::error::{Error, Result};

/// MIME type of every stored progress photo
pub const JPEG_MIME: &str = "image/jpeg";

/// Hands a file to something outside the app
pub trait Share: Debug + Send + Sync {
    fn share(&self, path: &Path, mime: &str) -> Result<()>;
}

/// Opens the file with the operating system's default handler
#[derive(Debug, Default)]
pub struct SystemShare;

impl Share for SystemShare {
    fn share(&self, path: &Path, mime: &str) -> Result<()> {
        if !path.is_file() {
            return Err(Error::Share(format!("{} does not exist", path.display())));
        }

        open::that_detached(path).map_err(|e| Error::Share(e.to_string()))?;

        tracing::info!("📤 Shared {} as {}", path.display(), mime);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_not_shared() {
        let temp = tempdir().unwrap();
        let result = SystemShare.share(&temp.path().join("2024-06-15.jpg"), JPEG_MIME);

        assert!(matches!(result, Err(Error::Share(_))));
    }
}
