use crate::character_sets::CharSet;
use crate::compat::{Cow, String};
use crate::encoder::{EncoderOptions, PercentEncoder};
use crate::error::{CodecError, Result};
use crate::helpers::has_escape_markers;
use crate::unicode::percent_encode::{decode_triplet, push_encoded_char};
use crate::unicode::utf8::{PendingSequence, Utf8Step};
use log::trace;

/// Configuration of a [`PercentDecoder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderOptions<'a> {
    /// Characters that stay escaped when they appear as `%HH`
    pub ignore: &'a str,
    /// Characters that stay escaped when they appear as `%HH`, and are
    /// escaped when they appear literally
    pub unsafe_chars: &'a str,
    /// Query-string rules: `+` decodes to a space and `+=&;` stay escaped
    pub qs: bool,
}

impl<'a> DecoderOptions<'a> {
    pub const fn new() -> Self {
        Self {
            ignore: "",
            unsafe_chars: "",
            qs: false,
        }
    }

    #[must_use]
    pub const fn ignore(mut self, ignore: &'a str) -> Self {
        self.ignore = ignore;
        self
    }

    #[must_use]
    pub const fn unsafe_chars(mut self, unsafe_chars: &'a str) -> Self {
        self.unsafe_chars = unsafe_chars;
        self
    }

    #[must_use]
    pub const fn qs(mut self, qs: bool) -> Self {
        self.qs = qs;
        self
    }

    pub fn build(self) -> PercentDecoder {
        PercentDecoder::new(self)
    }
}

/// Reverses percent-encoding for one URL component.
///
/// Consecutive triplets are reassembled into multi-byte characters. The
/// decoder never fails on malformed input: a `%` without two hex digits is
/// kept literally, and triplets that do not form valid UTF-8 are copied to
/// the output exactly as they appeared in the source.
///
/// ```
/// use urlquote::{DecoderOptions, PercentDecoder};
///
/// let decoder = PercentDecoder::new(DecoderOptions::new().unsafe_chars("/"));
/// assert_eq!(decoder.decode("caf%C3%A9%2F%20x"), "café%2F x");
///
/// let query = DecoderOptions::new().qs(true).build();
/// assert_eq!(query.decode("a+b%26c"), "a b%26c");
/// ```
#[derive(Debug, Clone)]
pub struct PercentDecoder {
    ignore: CharSet,
    unsafe_chars: CharSet,
    has_unsafe: bool,
    qs: bool,
    plus_is_space: bool,
    /// Re-escapes decoded `ignore` and `unsafe` characters
    encoder: PercentEncoder,
    /// Re-escapes decoded query-string delimiters
    qs_encoder: PercentEncoder,
}

impl PercentDecoder {
    pub fn new(options: DecoderOptions<'_>) -> Self {
        let unsafe_chars = CharSet::new(options.unsafe_chars);

        Self {
            ignore: CharSet::new(options.ignore),
            has_unsafe: !unsafe_chars.is_empty(),
            qs: options.qs,
            plus_is_space: options.qs && !unsafe_chars.contains('+'),
            unsafe_chars,
            encoder: PercentEncoder::new(EncoderOptions::new()),
            qs_encoder: PercentEncoder::new(EncoderOptions::new().qs(true)),
        }
    }

    /// Unescape `input`.
    /// Borrows the input when nothing had to change.
    pub fn decode<'a>(&self, input: &'a str) -> Cow<'a, str> {
        // Fast path: nothing to decode and nothing to re-escape
        if !self.has_unsafe && !has_escape_markers(input, self.qs) {
            return Cow::Borrowed(input);
        }

        let bytes = input.as_bytes();
        let mut out = String::with_capacity(input.len());
        let mut pending = PendingSequence::new();
        let mut chars = input.char_indices();

        while let Some((pos, c)) = chars.next() {
            if c == '%' {
                if let Some(byte) = decode_triplet(bytes, pos) {
                    // Skip the two hex digits
                    chars.nth(1);
                    self.push_decoded_byte(&mut out, &mut pending, input, byte, pos);
                    continue;
                }
            }

            // Only contiguous triplets can complete a character
            flush_pending(&mut out, &mut pending, input);

            match c {
                '+' if self.plus_is_space => out.push(' '),
                '+' => out.push('+'),
                // One triplet per UTF-8 byte, so the escape decodes back to `c`
                c if self.unsafe_chars.contains(c) => push_encoded_char(&mut out, c),
                c => out.push(c),
            }
        }

        flush_pending(&mut out, &mut pending, input);

        if out == input {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(out)
        }
    }

    /// Feed a byte decoded from the triplet at `pos` into the pending
    /// sequence, emitting the character once it is complete.
    fn push_decoded_byte(
        &self,
        out: &mut String,
        pending: &mut PendingSequence,
        input: &str,
        byte: u8,
        pos: usize,
    ) {
        let c = match pending.push(byte, pos) {
            Utf8Step::Complete(c) => c,
            Utf8Step::Incomplete => return,
            Utf8Step::Invalid => {
                trace!("invalid UTF-8 sequence at byte {pos}, keeping escapes verbatim");
                flush_pending(out, pending, input);

                // Retry the byte as the start of a new sequence
                match pending.push(byte, pos) {
                    Utf8Step::Complete(c) => c,
                    Utf8Step::Incomplete => return,
                    Utf8Step::Invalid => {
                        out.push_str(&input[pos..pos + 3]);
                        return;
                    }
                }
            }
        };

        self.push_decoded_char(out, c);
    }

    fn push_decoded_char(&self, out: &mut String, c: char) {
        let mut utf8 = [0u8; 4];
        if self.qs && matches!(c, '+' | '=' | '&' | ';') {
            out.push_str(&self.qs_encoder.encode(c.encode_utf8(&mut utf8)));
        } else if self.unsafe_chars.contains(c) || self.ignore.contains(c) {
            out.push_str(&self.encoder.encode(c.encode_utf8(&mut utf8)));
        } else {
            out.push(c);
        }
    }

    /// [`decode`](Self::decode) that passes an absent value through.
    pub fn decode_opt<'a>(&self, input: Option<&'a str>) -> Option<Cow<'a, str>> {
        input.map(|text| self.decode(text))
    }

    /// Unescape raw bytes that must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidInputType`] if `input` is not valid UTF-8.
    pub fn try_decode<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, str>> {
        core::str::from_utf8(input)
            .map(|text| self.decode(text))
            .map_err(|_| CodecError::InvalidInputType)
    }
}

impl Default for PercentDecoder {
    fn default() -> Self {
        Self::new(DecoderOptions::new())
    }
}

/// Copy the source text of buffered triplets to the output unchanged
#[inline]
fn flush_pending(out: &mut String, pending: &mut PendingSequence, input: &str) {
    if !pending.is_empty() {
        out.push_str(&input[pending.span()]);
        pending.reset();
    }
}
