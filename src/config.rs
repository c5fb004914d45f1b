/// Startup settings
///
/// Nothing is persisted between runs: every launch starts from the
/// command line, or from the desktop folder and the first RAW format.

use clap::Parser;
use std::path::PathBuf;

use crate::state::RawFormat;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "photo-triage")]
#[command(about = "Review JPEG + RAW pairs and delete the ones you don't want")]
#[command(version)]
pub struct Cli {
    /// Folder to open (defaults to the desktop, then asks for a folder)
    pub directory: Option<PathBuf>,

    /// RAW extension paired with each JPEG (CR3, CR2, NEF, ARW, ...)
    #[arg(short, long, default_value_t = RawFormat::default())]
    pub raw_format: RawFormat,
}

/// Resolved settings the application starts with
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub directory: PathBuf,
    pub raw_format: RawFormat,
    /// Open the folder picker right after startup
    pub pick_folder_on_start: bool,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Self {
        let pick_folder_on_start = cli.directory.is_none();
        Self {
            directory: cli.directory.unwrap_or_else(default_directory),
            raw_format: cli.raw_format,
            pick_folder_on_start,
        }
    }
}

/// The user's desktop folder
///
/// Falls back to the home directory, then the current directory.
pub fn default_directory() -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["photo-triage"]).unwrap();
        let settings = Settings::from_cli(cli);

        assert_eq!(settings.raw_format, RawFormat::Cr3);
        assert_eq!(settings.directory, default_directory());
        assert!(settings.pick_folder_on_start);
    }

    #[test]
    fn test_directory_and_format_from_args() {
        let cli = Cli::try_parse_from(["photo-triage", "/photos/2024", "--raw-format", "nef"]).unwrap();
        let settings = Settings::from_cli(cli);

        assert_eq!(settings.directory, PathBuf::from("/photos/2024"));
        assert_eq!(settings.raw_format, RawFormat::Nef);
        assert!(!settings.pick_folder_on_start);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["photo-triage", "-r", "tiff"]).is_err());
    }
}
