//! Line splitting shared by every document-level operation.

/// Split `text` into lines.
///
/// `str::split('\n')` preserves trailing empty segments, which matches typical editor line
/// semantics (N newlines => N+1 lines). A `'\r'` before the `'\n'` stays in the line, so the
/// lines always join back into `text`.
pub fn split_lines_preserve_trailing(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
