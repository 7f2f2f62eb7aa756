/// Application error type
///
/// Every failure a screen can run into ends up here. Errors are `Clone`
/// so they can travel inside iced messages back to the screen that
/// started the work.
use thiserror::Error;

use crate::state::date::DateId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The picker refused access to the user's photos
    #[error("permission to access photos was denied")]
    PermissionDenied,

    /// Upload requested before an image was picked
    #[error("no image selected")]
    NoSelection,

    /// Directory create, copy, list or read failure
    #[error("I/O error: {0}")]
    Io(String),

    /// No progress image exists for this date
    #[error("no progress image for {0}")]
    NotFound(DateId),

    /// An image could not be decoded for display or staging
    #[error("failed to load image: {0}")]
    LoadFailure(String),

    /// The OS could not open the file for sharing
    #[error("could not share file: {0}")]
    Share(String),

    /// Settings file could not be read or written
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::LoadFailure(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_message() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert_eq!(err, Error::Io("disk full".to_string()));
    }

    #[test]
    fn not_found_names_the_date() {
        let date: DateId = "2024-06-15".parse().unwrap();
        assert_eq!(
            Error::NotFound(date).to_string(),
            "no progress image for 2024-06-15"
        );
    }
}
