/// User interface glue
///
/// - Drop-path cleanup for drag-and-drop (drop.rs)
/// - Native open/save/message dialogs (dialogs.rs)

pub mod dialogs;
pub mod drop;
