/// Compile-time application settings
///
/// Nothing here is persisted or read from disk; the tool starts with the
/// same defaults on every run.

/// Window title
pub const APP_TITLE: &str = "ImageResizeMiya";

/// Initial window size in logical pixels (width, height)
pub const WINDOW_SIZE: (f32, f32) = (450.0, 350.0);

/// Appended to the file stem when deriving the default output name
pub const RESIZED_SUFFIX: &str = "_resized";

/// Extensions offered by the "Browse..." dialog
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "webp"];

/// Filter names shown in the native dialogs
pub const IMAGE_FILTER_NAME: &str = "Image files";
pub const ALL_FILES_FILTER_NAME: &str = "All files";
pub const ORIGINAL_TYPE_FILTER_NAME: &str = "Original type";

/// Dialog titles
pub const OPEN_DIALOG_TITLE: &str = "Select an Image";
pub const SAVE_DIALOG_TITLE: &str = "Save Resized Image";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "image_resizer=info";
