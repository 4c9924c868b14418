//! Byte offset to line/column mapping.

/// 1-based line and column (in characters) of byte `offset` in `text`.
///
/// Offsets past the end clamp to the end of the text; offsets inside a
/// multi-byte character resolve to that character.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
