/// Photo metadata module
///
/// This module handles:
/// - Reading EXIF capture settings from JPEGs (exif.rs)
/// - Formatting file sizes for display (size.rs)

pub mod exif;
pub mod size;

pub use self::exif::{read_exif, ExifSummary, NOT_AVAILABLE};
pub use self::size::file_size_display;
