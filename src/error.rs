//! Error types for the resize workflow.

use image::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while resizing one image.
///
/// Cancelling the save dialog is not an error; see `resize::Outcome`.
#[derive(Error, Debug)]
pub enum ResizeError {
    /// No source path, or the path does not exist on disk
    #[error("Please select a valid image file.")]
    InvalidSource,

    /// The source could not be opened or decoded
    #[error("Failed to read image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// The resized image could not be encoded or written
    #[error("Failed to save image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

impl ResizeError {
    /// True for errors the user fixes by choosing another file,
    /// false for processing errors raised by the image library.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ResizeError::InvalidSource)
    }
}

/// Convenience result type for resize operations.
pub type ResizeResult<T> = Result<T, ResizeError>;
