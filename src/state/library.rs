use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::data::{Lookup, ProgressEntry};
use super::date::{DateId, MonthId};
use crate::error::Result;

/// The ProgressLibrary manages the directory of progress photos.
///
/// Each photo is stored as `<root>/<YYYY-MM-DD>.jpg`, so the date is the
/// only key and a second photo for the same day replaces the first.
/// Screens go through this type instead of building paths themselves.
#[derive(Debug, Clone)]
pub struct ProgressLibrary {
    root: PathBuf,
}

impl ProgressLibrary {
    /// Create a library rooted at `root`.
    ///
    /// Nothing is touched on disk; the directory is created by the first `put`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path where the photo for `date` lives (whether or not it exists)
    pub fn path_for(&self, date: DateId) -> PathBuf {
        self.root.join(date.filename())
    }

    /// Path of an arbitrary file name inside the library
    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Check whether the progress directory has been created yet
    pub async fn exists(&self) -> Result<bool> {
        is_kind(&self.root, |meta| meta.is_dir()).await
    }

    /// Store `source` as the photo for `date`, replacing any earlier one.
    /// Returns the path of the stored photo.
    pub async fn put(&self, date: DateId, source: &Path) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).await?;

        let destination = self.path_for(date);
        fs::copy(source, &destination).await?;

        tracing::info!("💾 Saved progress photo: {}", destination.display());
        Ok(destination)
    }

    /// Get the photo for `date`, if one was saved
    pub async fn get(&self, date: DateId) -> Result<Option<PathBuf>> {
        let path = self.path_for(date);
        if is_kind(&path, |meta| meta.is_file()).await? {
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Look up the photo for `date`.
    ///
    /// The directory check completes before the file check starts, so a
    /// missing directory is reported as `NoLibrary` rather than `Missing`.
    pub async fn lookup(&self, date: DateId) -> Result<Lookup> {
        if !self.exists().await? {
            return Ok(Lookup::NoLibrary);
        }

        Ok(match self.get(date).await? {
            Some(path) => Lookup::Found(path),
            None => Lookup::Missing,
        })
    }

    /// Get all photos in the library, newest date first.
    ///
    /// A directory that was never created is an empty library.
    pub async fn list(&self) -> Result<Vec<ProgressEntry>> {
        if !self.exists().await? {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let mut dir = fs::read_dir(&self.root).await?;
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let filename = entry.file_name().to_string_lossy().to_string();
            entries.push(ProgressEntry::new(filename, entry.path()));
        }

        // Date-named files sort chronologically, so descending puts the newest first
        entries.sort_by(|a, b| b.filename.cmp(&a.filename));

        tracing::debug!("📂 Listed {} progress photos", entries.len());
        Ok(entries)
    }

    /// Days of `month` that have a photo
    pub async fn dates_in_month(&self, month: MonthId) -> Result<Vec<DateId>> {
        let dates = self
            .list()
            .await?
            .into_iter()
            .filter_map(|entry| entry.date)
            .filter(|date| month.contains(*date))
            .collect();

        Ok(dates)
    }
}

/// `true` if `path` exists and matches `predicate`, `false` if it is absent
async fn is_kind(path: &Path, predicate: impl Fn(&std::fs::Metadata) -> bool) -> Result<bool> {
    match fs::metadata(path).await {
        Ok(meta) => Ok(predicate(&meta)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}
