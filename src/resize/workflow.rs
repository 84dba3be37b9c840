/// The resize-and-save workflow
///
/// One call to `execute` is one press of the "Resize" button:
/// validate -> decode -> resample -> pick destination -> encode.
/// Every failure comes back as a `ResizeError`; nothing here panics.
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_destination, with_default_extension, DefaultDestination};
use crate::error::{ResizeError, ResizeResult};
use crate::state::{ResizeRequest, SaveMode};

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The resized image was written to this path
    Saved(PathBuf),
    /// The user dismissed the save dialog; nothing was written
    Cancelled,
}

/// Asks the user where to save in `ArbitraryFolder` mode
pub trait DestinationPrompt {
    /// Returns the chosen path, or `None` if the dialog was cancelled
    fn ask(&self, default: &DefaultDestination) -> Option<PathBuf>;
}

/// Run the whole workflow for one request
pub fn execute(request: &ResizeRequest, prompt: &dyn DestinationPrompt) -> ResizeResult<Outcome> {
    if !request.has_valid_source() {
        debug!(source = %request.source.display(), "rejected resize: no valid source file");
        return Err(ResizeError::InvalidSource);
    }

    let (width, height) = request.preset.dimensions();
    info!(
        source = %request.source.display(),
        preset = request.preset.label,
        mode = ?request.save_mode,
        "🖼️  Resizing"
    );

    let resized = {
        let original = decode(&request.source)?;
        resample(&original, width, height)
    };

    let default = default_destination(&request.source);
    let destination = match request.save_mode {
        SaveMode::SameFolder => default.path(),
        SaveMode::ArbitraryFolder => match prompt.ask(&default) {
            Some(chosen) if !chosen.as_os_str().is_empty() => {
                with_default_extension(chosen, default.extension.as_ref())
            }
            _ => {
                debug!("save dialog cancelled, nothing written");
                return Ok(Outcome::Cancelled);
            }
        },
    };

    encode(&resized, &destination)?;
    info!(destination = %destination.display(), width, height, "✅ Saved resized image");

    Ok(Outcome::Saved(destination))
}

/// Open and decode the source; the file handle is closed on return
pub fn decode(path: &Path) -> ResizeResult<DynamicImage> {
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image::ImageError::IoError)
        .and_then(|reader| reader.decode());

    decoded.map_err(|source| ResizeError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Stretch to exactly `width` x `height` with Lanczos3
///
/// Aspect ratio is not preserved and nothing is cropped.
pub fn resample(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Write the image, picking the format from the destination's extension.
/// An existing file at `path` is overwritten.
pub fn encode(image: &DynamicImage, path: &Path) -> ResizeResult<()> {
    image.save(path).map_err(|source| ResizeError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
