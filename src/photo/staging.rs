/// Staging of picked photos
///
/// A picked file is decoded to prove it is an image, then staged in the
/// cache directory. JPEGs are copied byte for byte so quality and EXIF
/// (orientation included) survive. Other formats are re-encoded as JPEG,
/// so every stored progress photo is a real JPEG whatever the user picked.
use chrono::Utc;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, ImageReader};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Quality used when a non-JPEG pick has to be re-encoded
const JPEG_QUALITY: u8 = 95;

/// Stage `source` into `staging_dir`, returning the staged JPEG path
pub async fn stage_image(source: PathBuf, staging_dir: PathBuf) -> Result<PathBuf> {
    // Decoding and encoding are CPU-bound
    tokio::task::spawn_blocking(move || stage_image_blocking(&source, &staging_dir))
        .await
        .map_err(|e| Error::Io(format!("Task join error: {}", e)))?
}

fn stage_image_blocking(source: &Path, staging_dir: &Path) -> Result<PathBuf> {
    if !source.exists() {
        return Err(Error::Io(format!("File not found: {}", source.display())));
    }

    // Sniff the content instead of trusting the extension
    let reader = ImageReader::open(source)?.with_guessed_format()?;
    let format = reader.format();
    let img = reader.decode()?;

    fs::create_dir_all(staging_dir)?;

    // A unique name per pick keeps iced's image cache from showing a stale photo
    let staged = staging_dir.join(format!("picked-{}.jpg", Utc::now().timestamp_millis()));

    if format == Some(ImageFormat::Jpeg) {
        fs::copy(source, &staged)?;
    } else {
        // JPEG has no alpha channel
        let mut encoded = Vec::new();
        img.to_rgb8()
            .write_with_encoder(JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY))?;
        fs::write(&staged, encoded)?;
    }

    tracing::info!(
        "📸 Staged {}x{} {:?} photo from {} at {}",
        img.width(),
        img.height(),
        format,
        source.display(),
        staged.display()
    );
    Ok(staged)
}

/// Remove a staged photo once it is no longer referenced
pub fn discard(staged: &Path) {
    if let Err(err) = fs::remove_file(staged) {
        tracing::debug!("Could not remove staged photo {}: {}", staged.display(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_png_is_staged_as_jpeg() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("photo.png");
        RgbaImage::from_pixel(8, 6, Rgba([200, 10, 10, 128]))
            .save(&source)
            .unwrap();

        let staged = stage_image(source, temp.path().join("picked"))
            .await
            .unwrap();

        assert_eq!(staged.extension().unwrap(), "jpg");
        let reader = ImageReader::open(&staged)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Jpeg));
        let decoded = reader.decode().unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }

    #[tokio::test]
    async fn test_jpeg_is_staged_byte_for_byte() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("IMG_0042.JPG");
        RgbImage::from_pixel(16, 9, Rgb([30, 60, 90]))
            .save_with_format(&source, ImageFormat::Jpeg)
            .unwrap();

        // Splice an EXIF APP1 segment (Orientation = 6) in after SOI
        let mut bytes = fs::read(&source).unwrap();
        let exif: &[u8] = &[
            0xFF, 0xE1, 0x00, 0x22, b'E', b'x', b'i', b'f', 0, 0, b'M', b'M', 0x00, 0x2A, 0x00,
            0x00, 0x00, 0x08, 0x00, 0x01, 0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00,
            0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        bytes.splice(2..2, exif.iter().copied());
        fs::write(&source, &bytes).unwrap();

        let staged = stage_image(source, temp.path().join("picked"))
            .await
            .unwrap();

        assert_eq!(staged.extension().unwrap(), "jpg");
        assert_eq!(fs::read(&staged).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_png_named_jpg_is_reencoded() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("photo.jpg");
        RgbImage::from_pixel(5, 5, Rgb([0, 128, 255]))
            .save_with_format(&source, ImageFormat::Png)
            .unwrap();

        let staged = stage_image(source.clone(), temp.path().join("picked"))
            .await
            .unwrap();

        assert_ne!(fs::read(&staged).unwrap(), fs::read(&source).unwrap());
        let reader = ImageReader::open(&staged)
            .unwrap()
            .with_guessed_format()
            .unwrap();
        assert_eq!(reader.format(), Some(ImageFormat::Jpeg));
    }

    #[tokio::test]
    async fn test_non_image_is_rejected() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("notes.jpg");
        fs::write(&source, b"definitely not a photo").unwrap();

        let result = stage_image(source, temp.path().join("picked")).await;

        assert!(matches!(result, Err(Error::LoadFailure(_))));
    }

    #[tokio::test]
    async fn test_missing_source_is_io_error() {
        let temp = tempdir().unwrap();
        let result = stage_image(temp.path().join("gone.png"), temp.path().join("picked")).await;

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_discard_removes_file() {
        let temp = tempdir().unwrap();
        let staged = temp.path().join("picked-1.jpg");
        fs::write(&staged, b"x").unwrap();

        discard(&staged);
        discard(&staged);

        assert!(!staged.exists());
    }
}
