use crate::compat::String;
use percent_encoding::percent_encode_byte;

/// Value of a single hex digit, either case
#[inline]
pub const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}

/// Combine two hex digits into the byte they encode
#[inline]
pub const fn hex_pair(high: u8, low: u8) -> Option<u8> {
    match (hex_value(high), hex_value(low)) {
        (Some(h), Some(l)) => Some((h << 4) | l),
        _ => None,
    }
}

/// Decode the `%HH` triplet starting at `pos`.
/// Returns None if `pos` is not a `%` followed by two hex digits.
#[inline]
pub fn decode_triplet(bytes: &[u8], pos: usize) -> Option<u8> {
    match bytes.get(pos..pos + 3)? {
        [b'%', high, low] => hex_pair(*high, *low),
        _ => None,
    }
}

/// Append the `%HH` triplet for `byte` (uppercase hex)
#[inline]
pub fn push_encoded_byte(buffer: &mut String, byte: u8) {
    buffer.push_str(percent_encode_byte(byte));
}

/// Append one triplet per UTF-8 byte of `c`
pub fn push_encoded_char(buffer: &mut String, c: char) {
    let mut utf8 = [0u8; 4];
    for &byte in c.encode_utf8(&mut utf8).as_bytes() {
        push_encoded_byte(buffer, byte);
    }
}
