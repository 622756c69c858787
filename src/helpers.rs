use crate::compat::{Cow, String};

/// Fast check whether a decoder has anything to do with `input`:
/// an escape marker `%`, or in query-string mode a `+`.
/// Optimization: Uses SIMD-accelerated memchr instead of a char scan
pub fn has_escape_markers(input: &str, qs: bool) -> bool {
    let bytes = input.as_bytes();
    if qs {
        memchr::memchr2(b'%', b'+', bytes).is_some()
    } else {
        memchr::memchr(b'%', bytes).is_some()
    }
}

/// Interpret `input` as UTF-8, dropping every invalid sequence.
/// Returns a Cow to avoid allocation when the bytes are already valid.
pub fn utf8_ignoring_errors(input: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = core::str::from_utf8(input) {
        return Cow::Borrowed(text);
    }

    let dropped: String = input.utf8_chunks().map(|chunk| chunk.valid()).collect();
    log::trace!(
        "dropped {} undecodable source byte(s)",
        input.len() - dropped.len()
    );
    Cow::Owned(dropped)
}
