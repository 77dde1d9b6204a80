//! Letter coordinates.
//!
//! Each axis is addressed with a single letter: `A` is index 0, `B` index 1
//! and so on up to the axis length. Anything that is not exactly one letter
//! in range parses to `None`, the "no selection" sentinel. Callers must treat
//! `None` as "move currently invalid", never as index 0.

/// Parse a one-letter coordinate for an axis of `limit` cells.
///
/// Lowercase letters are accepted and read as uppercase.
///
/// ```
/// use tui_match3_core::parse_coordinate;
///
/// assert_eq!(parse_coordinate("A", 10), Some(0));
/// assert_eq!(parse_coordinate("j", 10), Some(9));
/// assert_eq!(parse_coordinate("K", 10), None);
/// assert_eq!(parse_coordinate("AB", 10), None);
/// ```
pub fn parse_coordinate(text: &str, limit: usize) -> Option<usize> {
    let mut chars = text.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let ch = ch.to_ascii_uppercase();
    if !ch.is_ascii_uppercase() {
        return None;
    }
    let index = (ch as u8 - b'A') as usize;
    (index < limit).then_some(index)
}

/// Letter for a zero-based index (`0` -> `A`). `None` past `Z`.
pub fn coordinate_label(index: usize) -> Option<char> {
    if index >= 26 {
        return None;
    }
    Some((b'A' + index as u8) as char)
}
