use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::data::{is_jpeg_name, Outcome, PhotoEntry, RawFormat};
use super::display::PhotoDisplay;
use super::error::{TriageError, TriageResult};

/// Index meaning "nothing selected"; selecting it changes nothing
pub const NO_SELECTION: isize = -1;

/// Message shown in place of the preview once every photo is reviewed
pub const FINISHED_MESSAGE: &str = "Finish organizing photos";

/// The TriageSession owns the working folder and walks through its JPEGs.
///
/// It keeps the sorted photo list and the cursor into it, and applies the
/// three triage decisions (keep both, keep JPEG only, delete both) to disk.
/// One instance lives for the whole run and is owned by the application.
pub struct TriageSession {
    directory: PathBuf,
    raw_format: RawFormat,
    photos: Vec<PhotoEntry>,
    cursor: usize,
    finished: bool,
    /// Why the last folder load came back empty, if it failed
    load_error: Option<String>,
}

impl TriageSession {
    /// Create a session and load the given folder
    pub fn new(directory: PathBuf, raw_format: RawFormat) -> Self {
        let mut session = TriageSession {
            directory,
            raw_format,
            photos: Vec::new(),
            cursor: 0,
            finished: false,
            load_error: None,
        };
        session.reload();
        session
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn raw_format(&self) -> RawFormat {
        self.raw_format
    }

    pub fn photos(&self) -> &[PhotoEntry] {
        &self.photos
    }

    /// Index of the current photo, or None when the list is empty
    pub fn cursor(&self) -> Option<usize> {
        (!self.photos.is_empty()).then_some(self.cursor)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Where the session currently stands
    pub fn outcome(&self) -> Outcome {
        if self.photos.is_empty() {
            Outcome::Empty
        } else if self.finished {
            Outcome::Finished
        } else {
            Outcome::Show(self.cursor)
        }
    }

    /// Switch to another folder and start again from its first photo
    pub fn set_directory(&mut self, directory: PathBuf) -> Outcome {
        log::info!("📁 Opening folder: {}", directory.display());
        self.directory = directory;
        self.cursor = 0;
        self.finished = false;
        self.reload();
        self.outcome()
    }

    /// Pair JPEGs with a different RAW extension
    pub fn set_raw_format(&mut self, raw_format: RawFormat) -> Outcome {
        log::info!("🔁 RAW format set to {}", raw_format);
        self.raw_format = raw_format;
        self.reload();
        self.outcome()
    }

    /// Rescan the folder
    ///
    /// An unreadable folder leaves an empty list behind. The cursor is kept
    /// while it is still in range and reset to 0 otherwise.
    pub fn reload(&mut self) {
        match scan_directory(&self.directory, self.raw_format) {
            Ok(photos) => {
                let paired = photos.iter().filter(|p| p.has_raw).count();
                log::info!(
                    "📷 Loaded {} JPEGs ({} with {}) from {}",
                    photos.len(),
                    paired,
                    self.raw_format,
                    self.directory.display()
                );
                self.photos = photos;
                self.load_error = None;
            }
            Err(e) => {
                log::warn!("⚠️  {}", e);
                self.photos.clear();
                self.load_error = Some(e.to_string());
            }
        }

        if self.cursor >= self.photos.len() {
            self.cursor = 0;
        }
    }

    /// Make the photo at `index` current
    ///
    /// `NO_SELECTION` is ignored; any other out-of-range index selects the
    /// first photo.
    pub fn select(&mut self, index: isize) -> Outcome {
        if index == NO_SELECTION || self.photos.is_empty() {
            return self.outcome();
        }

        let index = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.photos.len())
            .unwrap_or(0);

        self.cursor = index;
        self.finished = false;
        Outcome::Show(index)
    }

    /// Keep JPEG and RAW; move on to the next photo
    pub fn keep_all(&mut self) -> Outcome {
        let filename = match self.actionable() {
            Ok(entry) => entry.filename.clone(),
            Err(outcome) => return outcome,
        };

        log::debug!("Keeping {} and its RAW", filename);
        self.advance_to(self.cursor + 1)
    }

    /// Delete the paired RAW file (if any), keep the JPEG, and move on
    pub fn keep_jpeg(&mut self) -> TriageResult<Outcome> {
        let entry = match self.actionable() {
            Ok(entry) => entry.clone(),
            Err(outcome) => return Ok(outcome),
        };
        let previous = self.cursor;

        let raw_path = self.directory.join(entry.raw_filename(self.raw_format));
        remove_if_exists(&raw_path)?;

        self.reload();

        // The JPEG is still listed; continue right after it
        let next = match self.position_of(&entry.filename) {
            Some(index) => index + 1,
            None => previous + 1,
        };
        Ok(self.advance_to(next))
    }

    /// Delete the JPEG and its paired RAW file (if any), and move on
    ///
    /// If the JPEG cannot be removed nothing is touched. A failure removing
    /// the RAW is reported after the folder has been reloaded.
    pub fn delete_all(&mut self) -> TriageResult<Outcome> {
        let entry = match self.actionable() {
            Ok(entry) => entry.clone(),
            Err(outcome) => return Ok(outcome),
        };

        let jpeg_path = self.directory.join(&entry.filename);
        let raw_path = self.directory.join(entry.raw_filename(self.raw_format));

        remove_if_exists(&jpeg_path)?;
        let raw_removed = remove_if_exists(&raw_path);

        self.reload();

        // Whatever now sorts right after the deleted name takes its place
        let next = self.photos.partition_point(|p| p.filename < entry.filename);
        let outcome = self.advance_to(next);

        raw_removed?;
        Ok(outcome)
    }

    /// Details of the current photo, or None when there is nothing to show
    pub fn display(&self) -> Option<PhotoDisplay> {
        match self.outcome() {
            Outcome::Show(index) => {
                Some(PhotoDisplay::load(&self.directory, &self.photos[index].filename))
            }
            Outcome::Finished | Outcome::Empty => None,
        }
    }

    /// The current photo, unless there is nothing left to act on
    fn actionable(&self) -> Result<&PhotoEntry, Outcome> {
        match self.outcome() {
            Outcome::Show(index) => Ok(&self.photos[index]),
            other => Err(other),
        }
    }

    fn position_of(&self, filename: &str) -> Option<usize> {
        self.photos
            .binary_search_by(|p| p.filename.as_str().cmp(filename))
            .ok()
    }

    /// Select `position`, or finish when it runs past the end of the list
    fn advance_to(&mut self, position: usize) -> Outcome {
        if position >= self.photos.len() {
            log::info!("✅ {}", FINISHED_MESSAGE);
            self.finished = true;
            return Outcome::Finished;
        }

        self.cursor = position;
        self.finished = false;
        Outcome::Show(position)
    }
}

impl std::fmt::Debug for TriageSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageSession")
            .field("directory", &self.directory)
            .field("raw_format", &self.raw_format)
            .field("photos", &self.photos.len())
            .field("cursor", &self.cursor)
            .field("finished", &self.finished)
            .finish()
    }
}

/// List the JPEGs directly inside `directory`, sorted by filename
///
/// Each entry records whether `stem.EXT` exists next to it.
pub fn scan_directory(directory: &Path, raw_format: RawFormat) -> TriageResult<Vec<PhotoEntry>> {
    let mut photos = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is the folder itself
            Err(e) if e.depth() == 0 => {
                return Err(TriageError::ReadDirectory {
                    path: directory.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                log::warn!("⚠️  Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(filename) = entry.file_name().to_str() else {
            log::debug!("Skipping non UTF-8 filename: {:?}", entry.file_name());
            continue;
        };
        if !is_jpeg_name(filename) {
            continue;
        }

        let mut photo = PhotoEntry {
            filename: filename.to_string(),
            has_raw: false,
        };
        photo.has_raw = directory.join(photo.raw_filename(raw_format)).is_file();
        photos.push(photo);
    }

    photos.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(photos)
}

/// Delete a file, treating "already gone" as success
///
/// Returns whether a file was actually removed.
fn remove_if_exists(path: &Path) -> TriageResult<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            log::info!("🗑️  Deleted {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Nothing to delete at {}", path.display());
            Ok(false)
        }
        Err(source) => {
            log::error!("❌ Could not delete {}: {}", path.display(), source);
            Err(TriageError::Delete {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
