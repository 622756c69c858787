use crate::compat::Vec;

// Character classes from RFC 3986, section 2
// https://www.rfc-editor.org/rfc/rfc3986#section-2

pub const GEN_DELIMS: &str = ":/?#[]@";
pub const SUB_DELIMS_WITHOUT_QS: &str = "!$'()*,";
pub const SUB_DELIMS: &str = "!$'()*,+&=;";
pub const RESERVED: &str = ":/?#[]@!$'()*,+&=;";
pub const UNRESERVED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Unreserved characters plus the sub-delimiters that carry no meaning in a
/// query string. Encoders never escape these.
pub const ALLOWED: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~!$'()*,";

/// Sub-delimiters that separate query-string pairs
pub const QS_SUB_DELIMS: &str = "+&=;";

/// Membership table over all 256 byte values.
/// Built at compile time for the fixed sets, once per codec for custom ones.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ByteSet([bool; 256]);

impl ByteSet {
    pub const EMPTY: Self = Self([false; 256]);

    /// Collect the ASCII characters of `chars`. Anything else is skipped.
    pub const fn from_ascii(chars: &str) -> Self {
        let bytes = chars.as_bytes();
        let mut table = [false; 256];
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i].is_ascii() {
                table[bytes[i] as usize] = true;
            }
            i += 1;
        }
        Self(table)
    }

    pub const fn union(mut self, other: Self) -> Self {
        let mut i = 0;
        while i < 256 {
            self.0[i] |= other.0[i];
            i += 1;
        }
        self
    }

    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.0[byte as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&member| member)
    }
}

impl Default for ByteSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries((0u8..=255).filter(|&b| self.contains(b)).map(char::from))
            .finish()
    }
}

pub const ALLOWED_SET: ByteSet = ByteSet::from_ascii(ALLOWED);
pub const QS_SUB_DELIMS_SET: ByteSet = ByteSet::from_ascii(QS_SUB_DELIMS);

/// Set of arbitrary characters: a byte table for ASCII and a short list for
/// the rest, which is rarely more than a handful of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    ascii: ByteSet,
    other: Vec<char>,
}

impl CharSet {
    pub fn new(chars: &str) -> Self {
        let mut other: Vec<char> = chars.chars().filter(|c| !c.is_ascii()).collect();
        other.sort_unstable();
        other.dedup();

        Self {
            ascii: ByteSet::from_ascii(chars),
            other,
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii.contains(c as u8)
        } else {
            self.other.binary_search(&c).is_ok()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ascii.is_empty() && self.other.is_empty()
    }
}
