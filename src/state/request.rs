/// Values collected by the UI and handed to the resize workflow
use std::path::PathBuf;

use super::preset::Preset;

/// Where the resized image goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Next to the source, named `<stem>_resized.<ext>`
    #[default]
    SameFolder,
    /// Ask the user with a save dialog
    ArbitraryFolder,
}

/// One execution of the workflow
///
/// Built from the view-model each time "Resize" is pressed and never kept
/// afterwards, so the workflow never reads widget state directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeRequest {
    /// Source path as typed, browsed or dropped (may be empty)
    pub source: PathBuf,
    /// Target size
    pub preset: Preset,
    /// Destination policy
    pub save_mode: SaveMode,
}

impl ResizeRequest {
    pub fn new(source: impl Into<PathBuf>, preset: Preset, save_mode: SaveMode) -> Self {
        Self {
            source: source.into(),
            preset,
            save_mode,
        }
    }

    /// True when the source points at something that exists on disk
    pub fn has_valid_source(&self) -> bool {
        !self.source.as_os_str().is_empty() && self.source.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_save_mode() {
        assert_eq!(SaveMode::default(), SaveMode::SameFolder);
    }

    #[test]
    fn test_empty_source_is_invalid() {
        let request = ResizeRequest::new("", Preset::default(), SaveMode::SameFolder);
        assert!(!request.has_valid_source());
    }

    #[test]
    fn test_missing_source_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let request = ResizeRequest::new(
            dir.path().join("missing.png"),
            Preset::default(),
            SaveMode::SameFolder,
        );
        assert!(!request.has_valid_source());
    }

    #[test]
    fn test_existing_source_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let request = ResizeRequest::new(&path, Preset::default(), SaveMode::ArbitraryFolder);
        assert!(request.has_valid_source());
    }
}
