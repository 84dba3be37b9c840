/// Native dialogs (rfd) behind the workflow's collaborator traits
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

use crate::config;
use crate::resize::paths::DefaultDestination;
use crate::resize::{DestinationPrompt, Notifier};

/// Show the "open file" dialog for picking a source image
///
/// Starts next to the current selection when it has an existing parent
/// directory, otherwise in the user's pictures folder.
pub fn pick_source(current: &str) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title(config::OPEN_DIALOG_TITLE)
        .add_filter(config::IMAGE_FILTER_NAME, &config::IMAGE_EXTENSIONS)
        .add_filter(config::ALL_FILES_FILTER_NAME, &["*"]);

    if let Some(dir) = initial_directory(current) {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}

fn initial_directory(current: &str) -> Option<PathBuf> {
    let parent = Path::new(current)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty() && dir.is_dir());

    match parent {
        Some(dir) => Some(dir.to_path_buf()),
        None => dirs::picture_dir(),
    }
}

/// "Save as" dialog pre-populated with the default `_resized` name
pub struct SaveDialog;

impl DestinationPrompt for SaveDialog {
    fn ask(&self, default: &DefaultDestination) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title(config::SAVE_DIALOG_TITLE)
            .set_file_name(default.file_name.to_string_lossy());

        if !default.dir.as_os_str().is_empty() {
            dialog = dialog.set_directory(&default.dir);
        }

        if let Some(ext) = default.extension.as_ref().filter(|ext| !ext.is_empty()) {
            let ext = ext.to_string_lossy().into_owned();
            dialog = dialog.add_filter(config::ORIGINAL_TYPE_FILTER_NAME, &[ext]);
        }

        dialog.save_file()
    }
}

/// Message boxes for the two user-visible outcomes
pub struct MessageDialogNotifier;

impl Notifier for MessageDialogNotifier {
    fn error(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn success(&self, destination: &Path) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Success")
            .set_description(format!("Saved:\n{}", destination.display()))
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
