/// Human-readable file sizes
use std::path::Path;

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count with binary units and two decimals
///
/// Sizes past the last unit stay in TB.
pub fn format_file_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.2} {}", size, SIZE_UNITS[unit_index])
}

/// Size of a file on disk, formatted, or `None` if it cannot be read
pub fn file_size_display(path: &Path) -> Option<String> {
    std::fs::metadata(path).ok().map(|m| format_file_size(m.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.00 Bytes");
        assert_eq!(format_file_size(1023), "1023.00 Bytes");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(1_048_576), "1.00 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5.00 GB");
    }

    #[test]
    fn test_huge_sizes_stay_in_terabytes() {
        assert_eq!(format_file_size(2048 * 1024u64.pow(4)), "2048.00 TB");
    }

    #[test]
    fn test_file_size_display() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.jpg");
        std::fs::write(&path, vec![0u8; 1536]).unwrap();

        assert_eq!(file_size_display(&path).as_deref(), Some("1.50 KB"));
        assert_eq!(file_size_display(&dir.path().join("missing.jpg")), None);
    }
}
