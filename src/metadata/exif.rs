/// EXIF summary extraction
///
/// Reads the handful of capture settings shown next to each photo.
/// Every failure (unreadable file, no EXIF block, corrupt EXIF, odd
/// value types) degrades to a missing field instead of an error.

use chrono::NaiveDateTime;
use exif::{Exif, In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Placeholder for fields the file does not carry
pub const NOT_AVAILABLE: &str = "N/A";

/// Capture settings read from a photo's EXIF block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifSummary {
    /// Original capture date/time, formatted for display
    pub capture_time: Option<String>,
    /// Pixel width recorded by the camera
    pub width: Option<u32>,
    /// Pixel height recorded by the camera
    pub height: Option<u32>,
    /// ISO sensitivity
    pub iso: Option<u32>,
    /// Exposure time, formatted (e.g., "1/250 s")
    pub exposure_time: Option<String>,
    /// Aperture, formatted (e.g., "f/2.8")
    pub f_number: Option<String>,
}

impl ExifSummary {
    /// Check if any field was extracted
    pub fn has_data(&self) -> bool {
        self.capture_time.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.iso.is_some()
            || self.exposure_time.is_some()
            || self.f_number.is_some()
    }

    /// "W x H" when both dimensions are known
    pub fn dimensions_display(&self) -> String {
        match (self.width, self.height) {
            (Some(w), Some(h)) => format!("{} x {}", w, h),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn capture_time_display(&self) -> String {
        or_not_available(self.capture_time.as_ref())
    }

    pub fn iso_display(&self) -> String {
        or_not_available(self.iso.as_ref())
    }

    pub fn exposure_time_display(&self) -> String {
        or_not_available(self.exposure_time.as_ref())
    }

    pub fn f_number_display(&self) -> String {
        or_not_available(self.f_number.as_ref())
    }

    fn from_exif(exif: &Exif) -> Self {
        let field = |tag: Tag| exif.get_field(tag, In::PRIMARY).map(|f| &f.value);

        Self {
            capture_time: field(Tag::DateTimeOriginal).and_then(capture_time),
            width: field(Tag::PixelXDimension).and_then(|v| v.get_uint(0)),
            height: field(Tag::PixelYDimension).and_then(|v| v.get_uint(0)),
            iso: field(Tag::PhotographicSensitivity).and_then(|v| v.get_uint(0)),
            exposure_time: field(Tag::ExposureTime).and_then(exposure_time),
            f_number: field(Tag::FNumber).and_then(f_number),
        }
    }
}

/// Read the EXIF summary of a JPEG
///
/// Returns `None` when the file cannot be opened or has no usable EXIF block.
pub fn read_exif(path: &Path) -> Option<ExifSummary> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            log::debug!("Cannot open {} for EXIF: {}", path.display(), e);
            return None;
        }
    };

    let mut bufreader = BufReader::new(file);
    match Reader::new().read_from_container(&mut bufreader) {
        Ok(exif) => Some(ExifSummary::from_exif(&exif)),
        Err(e) => {
            log::debug!("No EXIF in {}: {}", path.display(), e);
            None
        }
    }
}

fn or_not_available<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string)
}

/// EXIF date format is "YYYY:MM:DD HH:MM:SS"
fn capture_time(value: &Value) -> Option<String> {
    let Value::Ascii(ref parts) = *value else {
        return None;
    };
    let raw = std::str::from_utf8(parts.first()?).ok()?;
    let raw = raw.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    if raw.is_empty() {
        return None;
    }

    match NaiveDateTime::parse_from_str(raw, "%Y:%m:%d %H:%M:%S") {
        Ok(parsed) => Some(parsed.format("%Y-%m-%d %H:%M:%S").to_string()),
        Err(_) => Some(raw.to_string()),
    }
}

fn first_rational(value: &Value) -> Option<f64> {
    let Value::Rational(ref parts) = *value else {
        return None;
    };
    let r = parts.first()?;
    if r.num == 0 || r.denom == 0 {
        return None;
    }
    Some(r.to_f64())
}

fn exposure_time(value: &Value) -> Option<String> {
    let seconds = first_rational(value)?;
    let reciprocal = 1.0 / seconds;
    // Only fast shutter speeds read naturally as fractions
    if seconds <= 0.5 || (seconds < 1.0 && (reciprocal - reciprocal.round()).abs() < 0.05) {
        Some(format!("1/{} s", reciprocal.round() as u64))
    } else if seconds.fract() == 0.0 {
        Some(format!("{} s", seconds as u64))
    } else {
        Some(format!("{:.1} s", seconds))
    }
}

fn f_number(value: &Value) -> Option<String> {
    first_rational(value).map(|n| format!("f/{:.1}", n))
}
