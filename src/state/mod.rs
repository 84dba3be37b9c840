/// State management module
///
/// This module holds the data the UI collects and the workflow consumes:
/// - The fixed preset table (preset.rs)
/// - Save mode and the per-execution resize request (request.rs)

pub mod preset;
pub mod request;

pub use preset::Preset;
pub use request::{ResizeRequest, SaveMode};
