use crate::character_sets::{ALLOWED_SET, ByteSet, CharSet, QS_SUB_DELIMS_SET};
use crate::compat::{Cow, String};
use crate::error::{CodecError, Result};
use crate::helpers::utf8_ignoring_errors;
use crate::unicode::percent_encode::{hex_pair, push_encoded_byte};
use log::trace;

/// Configuration of a [`PercentEncoder`].
///
/// All setters are `const`, so per-component options can live in constants
/// (see [`crate::presets`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions<'a> {
    /// Extra characters left unescaped. Only ASCII characters are honored.
    pub safe: &'a str,
    /// Characters whose `%HH` form in the input is kept as is instead of
    /// being turned back into the raw character.
    pub protected: &'a str,
    /// Query-string rules: space becomes `+` and `+&=;` are escaped.
    pub qs: bool,
    /// Treat `%HH` triplets already in the input as escapes rather than
    /// escaping their `%`.
    pub requote: bool,
}

impl<'a> EncoderOptions<'a> {
    pub const fn new() -> Self {
        Self {
            safe: "",
            protected: "",
            qs: false,
            requote: true,
        }
    }

    #[must_use]
    pub const fn safe(mut self, safe: &'a str) -> Self {
        self.safe = safe;
        self
    }

    #[must_use]
    pub const fn protected(mut self, protected: &'a str) -> Self {
        self.protected = protected;
        self
    }

    #[must_use]
    pub const fn qs(mut self, qs: bool) -> Self {
        self.qs = qs;
        self
    }

    #[must_use]
    pub const fn requote(mut self, requote: bool) -> Self {
        self.requote = requote;
        self
    }

    pub fn build(self) -> PercentEncoder {
        PercentEncoder::new(self)
    }
}

impl Default for EncoderOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes text for one URL component.
///
/// Every byte outside the safe set becomes an uppercase `%HH` triplet.
/// With requoting on, triplets already present in the input are normalized
/// to uppercase, and unescaped when they stand for a safe, unprotected
/// ASCII character. A `%` that does not start a valid triplet is escaped
/// to `%25`.
///
/// ```
/// use urlquote::{EncoderOptions, PercentEncoder};
///
/// let encoder = PercentEncoder::new(EncoderOptions::new().safe("/"));
/// assert_eq!(encoder.encode("/a b/%7e"), "/a%20b/~");
///
/// let query = EncoderOptions::new().qs(true).build();
/// assert_eq!(query.encode("a b&c"), "a+b%26c");
/// ```
#[derive(Debug, Clone)]
pub struct PercentEncoder {
    /// Bytes emitted verbatim: `ALLOWED`, ASCII `safe` and `protected`,
    /// and `+&=;` outside query-string mode
    safe: ByteSet,
    protected: CharSet,
    qs: bool,
    requote: bool,
}

impl PercentEncoder {
    pub fn new(options: EncoderOptions<'_>) -> Self {
        let mut safe = ALLOWED_SET
            .union(ByteSet::from_ascii(options.safe))
            .union(ByteSet::from_ascii(options.protected));
        if !options.qs {
            safe = safe.union(QS_SUB_DELIMS_SET);
        }

        Self {
            safe,
            protected: CharSet::new(options.protected),
            qs: options.qs,
            requote: options.requote,
        }
    }

    /// Byte copied to the output without any state change
    #[inline]
    fn passes_through(&self, b: u8) -> bool {
        self.safe.contains(b) && !(b == b'%' && self.requote) && !(b == b' ' && self.qs)
    }

    /// Escape `input`.
    /// Borrows the input when nothing had to change.
    pub fn encode<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let bytes = input.as_bytes();

        // Fast path: leading run of bytes that need no work
        let Some(first) = bytes.iter().position(|&b| !self.passes_through(b)) else {
            return Cow::Borrowed(input);
        };

        let mut out = String::with_capacity(bytes.len() + bytes.len() / 2);
        out.push_str(&input[..first]);

        // '%' plus up to two digits of a triplet being collected
        let mut triplet = [0u8; 3];
        let mut triplet_len = 0;
        let mut idx = first;

        while idx < bytes.len() {
            let b = bytes[idx];
            idx += 1;

            if triplet_len > 0 {
                triplet[triplet_len] = b.to_ascii_uppercase();
                triplet_len += 1;

                if triplet_len == 3 {
                    triplet_len = 0;
                    if let Some(value) = hex_pair(triplet[1], triplet[2]) {
                        self.push_requoted(&mut out, value, triplet);
                    } else {
                        // Not an escape: the two bytes after '%' are plain input
                        trace!("malformed escape at byte {}, escaping '%'", idx - 3);
                        out.push_str("%25");
                        idx -= 2;
                    }
                } else if idx == bytes.len() {
                    // Input ends one digit after '%'
                    trace!("truncated escape at byte {}, escaping '%'", idx - 2);
                    out.push_str("%25");
                    triplet_len = 0;
                    idx -= 1;
                }
                continue;
            }

            if b == b'%' && self.requote {
                triplet[0] = b'%';
                triplet_len = 1;
                if idx == bytes.len() {
                    out.push_str("%25");
                }
                continue;
            }

            if b == b' ' && self.qs {
                out.push('+');
            } else if self.safe.contains(b) {
                out.push(char::from(b));
            } else {
                push_encoded_byte(&mut out, b);
            }
        }

        if out == input {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(out)
        }
    }

    /// Emit a valid, uppercased `%HH` found in the input.
    /// A triplet is only ever unescaped, never escaped differently.
    #[inline]
    fn push_requoted(&self, out: &mut String, value: u8, triplet: [u8; 3]) {
        let decoded = char::from(value);
        if self.protected.contains(decoded) || !self.safe.contains(value) {
            out.extend(triplet.iter().map(|&b| char::from(b)));
        } else {
            out.push(decoded);
        }
    }

    /// [`encode`](Self::encode) that passes an absent value through.
    pub fn encode_opt<'a>(&self, input: Option<&'a str>) -> Option<Cow<'a, str>> {
        input.map(|text| self.encode(text))
    }

    /// Escape raw bytes that must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidInputType`] if `input` is not valid UTF-8.
    pub fn try_encode<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, str>> {
        core::str::from_utf8(input)
            .map(|text| self.encode(text))
            .map_err(|_| CodecError::InvalidInputType)
    }

    /// Escape raw bytes, silently dropping sequences that are not UTF-8.
    pub fn encode_lossy<'a>(&self, input: &'a [u8]) -> Cow<'a, str> {
        match utf8_ignoring_errors(input) {
            Cow::Borrowed(text) => self.encode(text),
            Cow::Owned(text) => Cow::Owned(self.encode(&text).into_owned()),
        }
    }
}

impl Default for PercentEncoder {
    fn default() -> Self {
        Self::new(EncoderOptions::new())
    }
}
