/// Full-screen preview decoding
///
/// Photos are decoded off the UI thread and handed to iced as RGBA
/// pixels. Decoding up front means a broken file is reported as an
/// error instead of rendering as an empty modal.
use iced::widget::image::Handle;
use image::imageops::FilterType;
use image::ImageReader;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Longest edge of a decoded preview
const PREVIEW_MAX_EDGE: u32 = 2048;

/// Decode the photo at `path` for display
pub async fn load_preview(path: PathBuf) -> Result<Handle> {
    tokio::task::spawn_blocking(move || load_preview_blocking(&path))
        .await
        .map_err(|e| Error::LoadFailure(format!("Task join error: {}", e)))?
}

fn load_preview_blocking(path: &Path) -> Result<Handle> {
    let decode = || -> Result<image::DynamicImage> {
        Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
    };

    // Anything that keeps the photo off screen counts as a load failure
    let mut img = decode().map_err(|err| match err {
        Error::LoadFailure(msg) => Error::LoadFailure(msg),
        other => Error::LoadFailure(other.to_string()),
    })?;

    if img.width() > PREVIEW_MAX_EDGE || img.height() > PREVIEW_MAX_EDGE {
        img = img.resize(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE, FilterType::Triangle);
    }

    let rgba = img.to_rgba8();
    tracing::debug!(
        "🖼️  Decoded preview {}x{} for {}",
        rgba.width(),
        rgba.height(),
        path.display()
    );

    Ok(Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw()))
}
