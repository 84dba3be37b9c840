/// Output path derivation
///
/// `/a/b/photo.JPG` becomes `/a/b/photo_resized.JPG`. The extension keeps its
/// original case and a path without a directory stays relative.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::RESIZED_SUFFIX;

/// Pieces of the source path that the save step needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultDestination {
    /// Directory of the source (empty for a bare file name)
    pub dir: PathBuf,
    /// `<stem>_resized<ext>`
    pub file_name: OsString,
    /// Source extension without the leading dot, if any
    pub extension: Option<OsString>,
}

impl DefaultDestination {
    /// Full default output path (`dir` joined with `file_name`)
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Split the source into directory, stem and extension and build the
/// default output name from them
pub fn default_destination(source: &Path) -> DefaultDestination {
    let dir = source.parent().map(Path::to_path_buf).unwrap_or_default();
    let extension = source.extension().map(|ext| ext.to_os_string());

    let mut file_name = source
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    file_name.push(RESIZED_SUFFIX);
    if let Some(ext) = &extension {
        file_name.push(".");
        file_name.push(ext);
    }

    DefaultDestination {
        dir,
        file_name,
        extension,
    }
}

/// Give a user-chosen path the source extension when it has none,
/// the way a save dialog's default extension behaves
pub fn with_default_extension(chosen: PathBuf, extension: Option<&OsString>) -> PathBuf {
    match extension {
        Some(ext) if chosen.extension().is_none() && !ext.is_empty() => {
            let mut name = chosen.into_os_string();
            name.push(".");
            name.push(ext);
            PathBuf::from(name)
        }
        _ => chosen,
    }
}
