/// What the preview pane shows for the current photo
///
/// Rebuilt on every selection: nothing here is cached between photos.

use std::path::{Path, PathBuf};

use crate::metadata::{file_size_display, read_exif, ExifSummary, NOT_AVAILABLE};

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoDisplay {
    /// Full path to the JPEG
    pub path: PathBuf,
    /// Working directory the photo was listed from
    pub folder: PathBuf,
    /// Filename only
    pub filename: String,
    /// Formatted file size (None if the file vanished)
    pub file_size: Option<String>,
    /// EXIF summary (None if the file has no usable EXIF block)
    pub exif: Option<ExifSummary>,
    /// Decoded pixel dimensions, used to scale the preview to the pane width
    pub pixel_size: Option<(u32, u32)>,
}

impl PhotoDisplay {
    /// Gather everything shown for one JPEG
    pub fn load(folder: &Path, filename: &str) -> Self {
        let path = folder.join(filename);
        let exif = read_exif(&path).filter(ExifSummary::has_data);

        // Header-only decode; fall back to what the camera recorded
        let pixel_size = image::image_dimensions(&path).ok().or_else(|| {
            let exif = exif.as_ref()?;
            Some((exif.width?, exif.height?))
        });

        Self {
            file_size: file_size_display(&path),
            folder: folder.to_path_buf(),
            filename: filename.to_string(),
            exif,
            pixel_size,
            path,
        }
    }

    pub fn folder_label(&self) -> String {
        format!("Current Folder: {}", self.folder.display())
    }

    pub fn file_label(&self) -> String {
        let exif = self.exif.clone().unwrap_or_default();
        format!(
            "Current File: {}\nSize: {}, Capture Time: {}, Dimensions: {}\nISO: {}, Exposure Time: {}, Aperture: {}",
            self.filename,
            self.file_size.as_deref().unwrap_or(NOT_AVAILABLE),
            exif.capture_time_display(),
            exif.dimensions_display(),
            exif.iso_display(),
            exif.exposure_time_display(),
            exif.f_number_display(),
        )
    }

    /// Folder and file labels as a single status block
    pub fn status(&self) -> String {
        format!("{}\n{}", self.folder_label(), self.file_label())
    }
}
