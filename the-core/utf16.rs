//! Conversions between byte offsets and UTF-16 code unit offsets.
//!
//! Field selections are expressed in UTF-16 code units, which is what native
//! text fields report. Rust strings are indexed by bytes, so every selection
//! write goes through these helpers.

/// Length of `text` in UTF-16 code units.
#[inline]
pub fn utf16_len(text: &str) -> usize {
  text.chars().map(char::len_utf16).sum()
}

/// Convert a UTF-16 offset into a byte offset.
///
/// Returns `None` when `offset` is past the end of `text` or falls between
/// the two halves of a surrogate pair.
pub fn utf16_to_byte(text: &str, offset: usize) -> Option<usize> {
  let mut units = 0;
  for (byte, ch) in text.char_indices() {
    if units == offset {
      return Some(byte);
    }
    units += ch.len_utf16();
    if units > offset {
      return None;
    }
  }
  (units == offset).then_some(text.len())
}

/// Convert a byte offset into a UTF-16 offset.
///
/// `byte` is clamped to the end of `text` and rounded down to the previous
/// char boundary.
pub fn byte_to_utf16(text: &str, byte: usize) -> usize {
  let mut byte = byte.min(text.len());
  while !text.is_char_boundary(byte) {
    byte -= 1;
  }
  utf16_len(&text[..byte])
}

/// The part of `text` after its first `offset` UTF-16 code units.
///
/// An offset inside a surrogate pair or past the end yields an empty string.
pub fn utf16_suffix(text: &str, offset: usize) -> &str {
  utf16_to_byte(text, offset).map_or("", |byte| &text[byte..])
}

/// Case-insensitive prefix test using full Unicode lowercasing on both sides.
pub fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
  haystack.to_lowercase().starts_with(&prefix.to_lowercase())
}
