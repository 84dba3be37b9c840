/// Mapping workflow results onto user notifications
use std::path::Path;
use tracing::{info, warn};

use super::workflow::Outcome;
use crate::error::ResizeResult;

/// Where success and error messages are shown
pub trait Notifier {
    fn error(&self, message: &str);
    fn success(&self, destination: &Path);
}

/// Show one notification for a finished run.
///
/// A cancelled save dialog shows nothing at all.
pub fn report(result: &ResizeResult<Outcome>, notifier: &dyn Notifier) {
    match result {
        Ok(Outcome::Saved(destination)) => notifier.success(destination),
        Ok(Outcome::Cancelled) => {}
        Err(err) => {
            if err.is_input_error() {
                info!("{}", err);
            } else {
                warn!("⚠️  Resize failed: {}", err);
            }
            notifier.error(&err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResizeError;
    use crate::resize::workflow::{execute, DestinationPrompt};
    use crate::resize::paths::DefaultDestination;
    use crate::state::{Preset, ResizeRequest, SaveMode};
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingNotifier {
        errors: RefCell<Vec<String>>,
        successes: RefCell<Vec<PathBuf>>,
    }

    impl Notifier for RecordingNotifier {
        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn success(&self, destination: &Path) {
            self.successes.borrow_mut().push(destination.to_path_buf());
        }
    }

    struct Answer(Option<PathBuf>);

    impl DestinationPrompt for Answer {
        fn ask(&self, _default: &DefaultDestination) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn test_empty_source_gives_one_error() {
        let notifier = RecordingNotifier::default();
        let request = ResizeRequest::new("", Preset::default(), SaveMode::SameFolder);

        report(&execute(&request, &Answer(None)), &notifier);

        assert_eq!(
            *notifier.errors.borrow(),
            vec!["Please select a valid image file.".to_string()]
        );
        assert!(notifier.successes.borrow().is_empty());
    }

    #[test]
    fn test_cancel_gives_no_notification() {
        let notifier = RecordingNotifier::default();
        report(&Ok(Outcome::Cancelled), &notifier);

        assert!(notifier.errors.borrow().is_empty());
        assert!(notifier.successes.borrow().is_empty());
    }

    #[test]
    fn test_success_carries_final_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("photo.png");
        image::RgbImage::new(16, 16).save(&source).unwrap();
        let out_dir = dir.path().join("x").join("y");
        std::fs::create_dir_all(&out_dir).unwrap();
        let chosen = out_dir.join("out.png");

        let notifier = RecordingNotifier::default();
        let preset = Preset::from_label("SVGA (800 x 600)").unwrap();
        let request = ResizeRequest::new(&source, preset, SaveMode::ArbitraryFolder);

        report(&execute(&request, &Answer(Some(chosen.clone()))), &notifier);

        assert_eq!(*notifier.successes.borrow(), vec![chosen.clone()]);
        assert!(notifier.errors.borrow().is_empty());
        assert_eq!(image::image_dimensions(&chosen).unwrap(), (800, 600));
    }

    #[test]
    fn test_processing_error_gives_one_error_with_cause() {
        let notifier = RecordingNotifier::default();
        let err = ResizeError::Encode {
            path: PathBuf::from("/read-only/out.png"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only file system",
            )),
        };

        report(&Err(err), &notifier);

        let errors = notifier.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("read-only file system"));
        assert!(notifier.successes.borrow().is_empty());
    }
}
