/// Photo processing module
///
/// This module handles:
/// - Staging picked photos as JPEG in the cache directory
/// - Decoding saved photos for the preview modal

pub mod preview;
pub mod staging;
