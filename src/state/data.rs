/// Shared data structures for the application state
///
/// These types represent the data model that flows between
/// the triage session and the UI layer.

use std::fmt;
use std::str::FromStr;

use super::error::TriageError;

/// Camera RAW extensions that can be paired with a JPEG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RawFormat {
    #[default]
    Cr3,
    Cr2,
    Nef,
    Arw,
    Orf,
    Rw2,
    Dng,
    Raf,
    Srw,
    Pef,
    Mos,
    Crw,
    Srf,
    Mrw,
    Dcr,
    Erf,
    Raw,
}

impl RawFormat {
    /// Every supported format, in the order shown in the format picker
    pub const ALL: [RawFormat; 17] = [
        RawFormat::Cr3,
        RawFormat::Cr2,
        RawFormat::Nef,
        RawFormat::Arw,
        RawFormat::Orf,
        RawFormat::Rw2,
        RawFormat::Dng,
        RawFormat::Raf,
        RawFormat::Srw,
        RawFormat::Pef,
        RawFormat::Mos,
        RawFormat::Crw,
        RawFormat::Srf,
        RawFormat::Mrw,
        RawFormat::Dcr,
        RawFormat::Erf,
        RawFormat::Raw,
    ];

    /// Upper-case file extension without the dot (e.g., "CR2")
    ///
    /// Sibling lookups use exactly this spelling.
    pub fn extension(self) -> &'static str {
        match self {
            RawFormat::Cr3 => "CR3",
            RawFormat::Cr2 => "CR2",
            RawFormat::Nef => "NEF",
            RawFormat::Arw => "ARW",
            RawFormat::Orf => "ORF",
            RawFormat::Rw2 => "RW2",
            RawFormat::Dng => "DNG",
            RawFormat::Raf => "RAF",
            RawFormat::Srw => "SRW",
            RawFormat::Pef => "PEF",
            RawFormat::Mos => "MOS",
            RawFormat::Crw => "CRW",
            RawFormat::Srf => "SRF",
            RawFormat::Mrw => "MRW",
            RawFormat::Dcr => "DCR",
            RawFormat::Erf => "ERF",
            RawFormat::Raw => "RAW",
        }
    }
}

impl fmt::Display for RawFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for RawFormat {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('.');
        RawFormat::ALL
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TriageError::UnknownRawFormat(s.to_string()))
    }
}

/// A single JPEG in the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoEntry {
    /// Filename only (e.g., "DSC_0001.JPG")
    pub filename: String,
    /// Whether `stem.EXT` existed next to the JPEG when the folder was loaded
    pub has_raw: bool,
}

impl PhotoEntry {
    /// Filename without the trailing ".jpg" (any case)
    pub fn stem(&self) -> &str {
        jpeg_stem(&self.filename)
    }

    /// Filename of the paired RAW file for the given format
    pub fn raw_filename(&self, format: RawFormat) -> String {
        format!("{}.{}", self.stem(), format.extension())
    }

    /// Label shown in the photo list, e.g. "DSC_0001.JPG [CR2]"
    pub fn label(&self, format: RawFormat) -> String {
        if self.has_raw {
            format!("{} [{}]", self.filename, format)
        } else {
            self.filename.clone()
        }
    }
}

/// Check whether a filename ends in ".jpg", ignoring case
pub fn is_jpeg_name(filename: &str) -> bool {
    filename
        .len()
        .checked_sub(4)
        .and_then(|start| filename.get(start..))
        .is_some_and(|ext| ext.eq_ignore_ascii_case(".jpg"))
}

fn jpeg_stem(filename: &str) -> &str {
    if is_jpeg_name(filename) {
        &filename[..filename.len() - 4]
    } else {
        filename
    }
}

/// Where the session ended up after a selection or triage action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The photo at this index is now current
    Show(usize),
    /// Every photo has been reviewed
    Finished,
    /// The folder has no JPEG files
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_names_ignore_case() {
        assert!(is_jpeg_name("a.jpg"));
        assert!(is_jpeg_name("B.JPG"));
        assert!(is_jpeg_name("c.JpG"));
        assert!(!is_jpeg_name("d.jpeg"));
        assert!(!is_jpeg_name("e.CR2"));
        assert!(!is_jpeg_name("jpg"));
    }

    #[test]
    fn test_raw_filename_uses_upper_case_extension() {
        let entry = PhotoEntry { filename: "IMG_0042.JPG".to_string(), has_raw: false };
        assert_eq!(entry.stem(), "IMG_0042");
        assert_eq!(entry.raw_filename(RawFormat::Nef), "IMG_0042.NEF");
    }

    #[test]
    fn test_label_marks_pairs() {
        let paired = PhotoEntry { filename: "a.jpg".to_string(), has_raw: true };
        let single = PhotoEntry { filename: "b.jpg".to_string(), has_raw: false };
        assert_eq!(paired.label(RawFormat::Cr2), "a.jpg [CR2]");
        assert_eq!(single.label(RawFormat::Cr2), "b.jpg");
    }

    #[test]
    fn test_parse_raw_format() {
        assert_eq!("cr2".parse::<RawFormat>().unwrap(), RawFormat::Cr2);
        assert_eq!(".NEF".parse::<RawFormat>().unwrap(), RawFormat::Nef);
        assert_eq!(" rw2 ".parse::<RawFormat>().unwrap(), RawFormat::Rw2);
        assert!("tiff".parse::<RawFormat>().is_err());
    }

    #[test]
    fn test_default_is_first_in_picker() {
        assert_eq!(RawFormat::default(), RawFormat::ALL[0]);
        assert_eq!(RawFormat::ALL.len(), 17);
    }
}
