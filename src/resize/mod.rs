/// Resize workflow module
///
/// This module handles:
/// - Deriving the `_resized` output path (paths.rs)
/// - Decoding, resampling and saving one image (workflow.rs)
/// - Turning the result into exactly one user notification, or none (report.rs)

pub mod paths;
pub mod report;
pub mod workflow;

pub use report::{report, Notifier};
pub use workflow::{execute, DestinationPrompt, Outcome};
