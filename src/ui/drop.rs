/// Drag-and-drop path cleanup
///
/// Some platforms wrap a dropped path in braces when it contains spaces,
/// e.g. `{C:\My Pictures\cat.png}`. Only one such layer is removed and the
/// result is not checked against the filesystem here.

/// Strip one enclosing `{`/`}` pair, if present
pub fn normalize_drop_path(raw: &str) -> String {
    match raw.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
        Some(inner) => inner.to_string(),
        None => raw.to_string(),
    }
}
